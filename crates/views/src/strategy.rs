use adcp_core::types::CampaignResult;

use crate::format;

/// Strategy summary: targeting plan on one side, budget plan on the other.
/// The fixed entries mirror what the generation service always plans for
/// (US geo, mobile + desktop, contextual content, even pacing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignStrategy {
    pub geographic: &'static str,
    pub audience: String,
    pub devices: &'static str,
    pub content: &'static str,
    pub total_budget: String,
    pub duration: String,
    pub pacing: &'static str,
    pub status: &'static str,
}

/// Project the strategy tab from a result.
pub fn strategy(result: &CampaignResult) -> CampaignStrategy {
    CampaignStrategy {
        geographic: "United States",
        audience: result.final_results.targeting_summary.clone(),
        devices: "Mobile, Desktop",
        content: "Contextual targeting",
        total_budget: format::usd(result.final_results.budget_allocation),
        duration: result.final_results.flight_dates.clone(),
        pacing: "Even",
        status: "Ready for execution",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{overview, product_cards, signal_cards};
    use adcp_core::types::CampaignResult;

    fn sample_result() -> CampaignResult {
        serde_json::from_value(serde_json::json!({
            "test_metadata": { "advertiser": "Acme", "campaign_name": "Launch" },
            "final_results": {
                "budget_allocation": 5000.0,
                "flight_dates": "2024-01-01 to 2024-02-01",
                "signals_available": 2,
                "products_available": 3,
                "targeting_summary": "Sports and fitness enthusiasts",
                "recommendations": [
                    "Signals discovered and activated for target audience",
                    "Ready for campaign execution"
                ]
            },
            "signals_agent": {
                "discovery": {
                    "signals": [
                        {
                            "name": "Sports Fans",
                            "description": "Sports enthusiasts",
                            "coverage_percentage": 42.5,
                            "pricing": { "cpm": 3.5 },
                            "data_provider": "Peer39"
                        },
                        {
                            "name": "Fitness Buyers",
                            "description": "Active fitness shoppers",
                            "coverage_percentage": 18.0
                        }
                    ]
                }
            },
            "sales_agent": {
                "products": {
                    "products": [
                        {
                            "name": "Homepage Takeover",
                            "description": "Premium guaranteed placement",
                            "delivery_type": "guaranteed",
                            "cpm": 25.0
                        },
                        {
                            "name": "Contextual Display",
                            "description": "Contextual targeting display",
                            "delivery_type": "non_guaranteed",
                            "price_guidance": { "p50": 12.0 }
                        },
                        {
                            "name": "Mobile Interstitial",
                            "description": "Full-screen mobile",
                            "delivery_type": "guaranteed"
                        }
                    ]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_overview_formats_budget_and_counts() {
        let view = overview(&sample_result());
        assert_eq!(view.budget, "$5,000");
        assert_eq!(view.signals_found, 2);
        assert_eq!(view.products_available, 3);
        assert_eq!(view.status, "Ready");
        assert_eq!(view.recommendations.len(), 2);
    }

    #[test]
    fn test_signal_cards_follow_discovery_order() {
        let cards = signal_cards(&sample_result());
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].name, "Sports Fans");
        assert_eq!(cards[0].coverage, "42.5%");
        assert_eq!(cards[0].cpm, "$3.5");
        assert_eq!(cards[0].data_provider, "Peer39");

        // Optional pricing and provider degrade to N/A.
        assert_eq!(cards[1].coverage, "18%");
        assert_eq!(cards[1].cpm, "N/A");
        assert_eq!(cards[1].data_provider, "N/A");
    }

    #[test]
    fn test_signal_cards_empty_when_discovery_absent() {
        let result: CampaignResult = serde_json::from_value(serde_json::json!({
            "test_metadata": { "advertiser": "Acme", "campaign_name": "Launch" },
            "final_results": {
                "budget_allocation": 5000.0,
                "flight_dates": "2024-01-01 to 2024-02-01",
                "signals_available": 0,
                "products_available": 0,
                "targeting_summary": "General audience",
                "recommendations": []
            },
            "signals_agent": { "error": "Signals agent not available" }
        }))
        .unwrap();

        assert!(signal_cards(&result).is_empty());
        assert!(product_cards(&result).is_empty());
    }

    #[test]
    fn test_product_cards_price_fallback_chain() {
        let cards = product_cards(&sample_result());
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].cpm, "$25");
        assert_eq!(cards[1].cpm, "$12");
        assert_eq!(cards[2].cpm, "N/A");
        assert_eq!(cards[0].policy_compliance, "N/A");
    }

    #[test]
    fn test_strategy_mirrors_budget_and_flight() {
        let view = strategy(&sample_result());
        assert_eq!(view.total_budget, "$5,000");
        assert_eq!(view.duration, "2024-01-01 to 2024-02-01");
        assert_eq!(view.audience, "Sports and fitness enthusiasts");
        assert_eq!(view.pacing, "Even");
    }

    #[test]
    fn test_projection_is_reproducible() {
        let result = sample_result();
        assert_eq!(overview(&result), overview(&result));
        assert_eq!(signal_cards(&result), signal_cards(&result));
    }
}
