use adcp_core::types::CampaignResult;

use crate::format;

/// Campaign overview: identity, key metrics, and recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignOverview {
    pub advertiser: String,
    pub campaign: String,
    pub budget: String,
    pub flight_dates: String,
    pub status: &'static str,
    pub signals_found: u64,
    pub products_available: u64,
    pub platform_coverage: &'static str,
    pub targeting: String,
    pub recommendations: Vec<String>,
}

/// Project the overview tab from a result.
pub fn overview(result: &CampaignResult) -> CampaignOverview {
    CampaignOverview {
        advertiser: result.test_metadata.advertiser.clone(),
        campaign: result.test_metadata.campaign_name.clone(),
        budget: format::usd(result.final_results.budget_allocation),
        flight_dates: result.final_results.flight_dates.clone(),
        status: "Ready",
        signals_found: result.final_results.signals_available,
        products_available: result.final_results.products_available,
        platform_coverage: "3 platforms",
        targeting: result.final_results.targeting_summary.clone(),
        recommendations: result.final_results.recommendations.clone(),
    }
}
