use adcp_core::types::CampaignResult;
use tabled::Tabled;

use crate::format;

/// One discovered signal, display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SignalCard {
    #[tabled(rename = "Signal")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Coverage")]
    pub coverage: String,
    #[tabled(rename = "CPM")]
    pub cpm: String,
    #[tabled(rename = "Provider")]
    pub data_provider: String,
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

/// Project the discovered signals, in service order. Empty when the
/// discovery path is absent from the result.
pub fn signal_cards(result: &CampaignResult) -> Vec<SignalCard> {
    result
        .signals()
        .iter()
        .map(|signal| SignalCard {
            name: signal.name.clone(),
            description: signal.description.clone(),
            coverage: format!("{}%", format::metric(signal.coverage_percentage)),
            cpm: format::usd_metric(signal.pricing.as_ref().and_then(|pricing| pricing.cpm)),
            data_provider: signal
                .data_provider
                .clone()
                .unwrap_or_else(|| format::NOT_AVAILABLE.to_string()),
            status: "Active",
        })
        .collect()
}
