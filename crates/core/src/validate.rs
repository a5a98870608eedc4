//! Client-side validation of campaign drafts.

use crate::error::ValidationError;
use crate::types::{CampaignDraft, CampaignRequest};

/// Minimum accepted campaign budget in USD.
pub const MIN_BUDGET: f64 = 1000.0;

impl CampaignDraft {
    /// Validate the draft and produce a wire-ready [`CampaignRequest`].
    ///
    /// Rules are checked in a fixed order (advertiser name, campaign name,
    /// brief, budget, date presence, date order) and the first failure wins.
    pub fn validate(&self) -> Result<CampaignRequest, ValidationError> {
        let advertiser_name = self.advertiser_name.trim();
        if advertiser_name.is_empty() {
            return Err(ValidationError::MissingAdvertiserName);
        }

        let campaign_name = self.campaign_name.trim();
        if campaign_name.is_empty() {
            return Err(ValidationError::MissingCampaignName);
        }

        let campaign_brief = self.campaign_brief.trim();
        if campaign_brief.is_empty() {
            return Err(ValidationError::MissingCampaignBrief);
        }

        let budget = match self.budget {
            Some(budget) if !budget.is_nan() && budget >= MIN_BUDGET => budget,
            _ => return Err(ValidationError::InvalidBudget),
        };

        let (start_date, end_date) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ValidationError::MissingFlightDates),
        };

        if end_date <= start_date {
            return Err(ValidationError::FlightDatesOutOfOrder);
        }

        Ok(CampaignRequest {
            advertiser_name: advertiser_name.to_string(),
            campaign_name: campaign_name.to_string(),
            campaign_brief: campaign_brief.to_string(),
            budget,
            start_date,
            end_date,
        })
    }
}
