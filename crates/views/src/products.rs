use adcp_core::types::CampaignResult;
use tabled::Tabled;

use crate::format;

/// One matched inventory product, display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ProductCard {
    #[tabled(rename = "Product")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Type")]
    pub delivery_type: String,
    #[tabled(rename = "CPM")]
    pub cpm: String,
    #[tabled(rename = "Policy")]
    pub policy_compliance: String,
}

/// Project the matched products, in service order. Empty when the catalog
/// path is absent from the result.
///
/// Price falls back from the fixed `cpm` to the `price_guidance.p50`
/// midpoint for non-guaranteed products, then to `N/A`.
pub fn product_cards(result: &CampaignResult) -> Vec<ProductCard> {
    result
        .products()
        .iter()
        .map(|product| ProductCard {
            name: product.name.clone(),
            description: product.description.clone(),
            delivery_type: product.delivery_type.clone(),
            cpm: format::usd_metric(product.cpm.or_else(|| {
                product
                    .price_guidance
                    .as_ref()
                    .and_then(|guidance| guidance.p50)
            })),
            policy_compliance: product
                .policy_compliance
                .clone()
                .unwrap_or_else(|| format::NOT_AVAILABLE.to_string()),
        })
        .collect()
}
