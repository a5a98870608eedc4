use thiserror::Error;

/// A rejected campaign draft. One variant per rule, checked in a fixed
/// order; only the first violated rule is ever reported. The display
/// messages are the exact strings shown to the operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter an advertiser name")]
    MissingAdvertiserName,

    #[error("Please enter a campaign name")]
    MissingCampaignName,

    #[error("Please enter a campaign brief")]
    MissingCampaignBrief,

    #[error("Please enter a valid budget (minimum $1,000)")]
    InvalidBudget,

    #[error("Please select start and end dates")]
    MissingFlightDates,

    #[error("End date must be after start date")]
    FlightDatesOutOfOrder,
}
