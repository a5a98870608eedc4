//! End-to-end flow: draft validation, generation request against a mocked
//! service, session storage, projection, and export.

use adcp_client::GenerationClient;
use adcp_core::config::ServiceConfig;
use adcp_core::types::CampaignDraft;
use adcp_session::{ExportError, Session};
use chrono::NaiveDate;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn acme_draft() -> CampaignDraft {
    CampaignDraft {
        advertiser_name: "Acme".to_string(),
        campaign_name: "Launch".to_string(),
        campaign_brief: "Q4 push".to_string(),
        budget: Some(5000.0),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 2, 1),
    }
}

fn service_config(base_url: String) -> ServiceConfig {
    ServiceConfig {
        base_url,
        timeout_secs: 5,
        max_retries: 1,
    }
}

fn two_signals_three_products() -> serde_json::Value {
    serde_json::json!({
        "test_metadata": {
            "advertiser": "Acme",
            "campaign_name": "Launch",
            "brief_summary": "Q4 push"
        },
        "final_results": {
            "budget_allocation": 5000.0,
            "flight_dates": "2024-01-01 to 2024-02-01",
            "signals_available": 2,
            "products_available": 3,
            "targeting_summary": "General audience",
            "recommendations": [
                "Signals discovered and activated for target audience",
                "Premium inventory identified for campaign objectives",
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
                        "name": "News Readers",
                        "description": "Daily news consumers",
                        "coverage_percentage": 61.0
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
                        "name": "Mobile Interstitial",
                        "description": "Full-screen mobile",
                        "delivery_type": "guaranteed",
                        "cpm": 15.0
                    },
                    {
                        "name": "Contextual Display",
                        "description": "Contextual targeting display",
                        "delivery_type": "non_guaranteed",
                        "price_guidance": { "p50": 12.0 }
                    }
                ]
            }
        }
    })
}

#[tokio::test]
async fn test_successful_generation_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-campaign"))
        .and(body_partial_json(serde_json::json!({
            "advertiserName": "Acme",
            "campaignName": "Launch",
            "campaignBrief": "Q4 push",
            "budget": 5000.0,
            "startDate": "2024-01-01",
            "endDate": "2024-02-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_signals_three_products()))
        .expect(1)
        .mount(&server)
        .await;

    let request = acme_draft().validate().unwrap();
    let client = GenerationClient::new(&service_config(server.uri())).unwrap();
    let result = client.generate(&request).await.unwrap();

    let mut session = Session::new();
    session.store(result);
    let stored = session.current().unwrap();

    let overview = adcp_views::overview(stored);
    assert_eq!(overview.budget, "$5,000");
    assert_eq!(overview.signals_found, 2);

    assert_eq!(adcp_views::signal_cards(stored).len(), 2);
    assert_eq!(adcp_views::product_cards(stored).len(), 3);
}

#[tokio::test]
async fn test_service_rejection_leaves_session_unset() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-campaign"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Invalid brief" })),
        )
        .mount(&server)
        .await;

    let request = acme_draft().validate().unwrap();
    let client = GenerationClient::new(&service_config(server.uri())).unwrap();

    let mut session = Session::new();
    match client.generate(&request).await {
        Ok(result) => session.store(result),
        Err(err) => assert_eq!(err.to_string(), "Invalid brief"),
    }

    assert!(!session.has_result());
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_the_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-campaign"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_signals_three_products()))
        .expect(0)
        .mount(&server)
        .await;

    let mut draft = acme_draft();
    draft.budget = Some(999.99);

    let err = draft.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please enter a valid budget (minimum $1,000)"
    );

    // Mock expectation of zero requests is verified when the server drops.
    drop(server);
}

#[test]
fn test_export_with_no_generation_fails_cleanly() {
    let session = Session::new();
    let dir = std::env::temp_dir();

    let err = session.export_to_file(&dir).unwrap_err();
    assert!(matches!(err, ExportError::NoResults));
    assert!(!session.has_result());
}
