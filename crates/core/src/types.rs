use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw campaign input as collected from the operator, before validation.
/// Text fields may be blank or whitespace; budget and dates may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignDraft {
    pub advertiser_name: String,
    pub campaign_name: String,
    pub campaign_brief: String,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A validated campaign request, serialized with the exact camelCase keys
/// the generation service expects. Text fields are stored trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub advertiser_name: String,
    pub campaign_name: String,
    pub campaign_brief: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Default flight dates: start today, end on the same day next month
/// (clamped to the last day of a shorter month).
pub fn default_flight_dates(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
    (today, end)
}

/// The generation service's response document.
///
/// Typed where the views need structure, tolerant everywhere else: every
/// level carries a passthrough map for fields the console does not consume
/// (`combined_workflow`, timestamps, media-buy records, signal activations),
/// so exporting a result loses nothing the service sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignResult {
    pub test_metadata: TestMetadata,
    pub final_results: FinalResults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signals_agent: Option<SignalsAgent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_agent: Option<SalesAgent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CampaignResult {
    /// Canonical pretty-printed (indent 2) JSON used by every export surface.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Discovered signals, empty when the discovery path is absent.
    pub fn signals(&self) -> &[Signal] {
        self.signals_agent
            .as_ref()
            .and_then(|agent| agent.discovery.as_ref())
            .map(|discovery| discovery.signals.as_slice())
            .unwrap_or_default()
    }

    /// Matched products, empty when the catalog path is absent.
    pub fn products(&self) -> &[Product] {
        self.sales_agent
            .as_ref()
            .and_then(|agent| agent.products.as_ref())
            .map(|catalog| catalog.products.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestMetadata {
    pub advertiser: String,
    pub campaign_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalResults {
    pub budget_allocation: f64,
    pub flight_dates: String,
    pub signals_available: u64,
    pub products_available: u64,
    pub targeting_summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalsAgent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery: Option<SignalDiscovery>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalDiscovery {
    #[serde(default)]
    pub signals: Vec<Signal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A targetable audience segment returned by the discovery step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Signal {
    pub name: String,
    pub description: String,
    pub coverage_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<SignalPricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_provider: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpm: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesAgent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductCatalog>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An inventory offering returned by the sales-matching step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub delivery_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_guidance: Option<PriceGuidance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_compliance: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceGuidance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p50: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
