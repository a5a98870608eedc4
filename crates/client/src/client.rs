//! REST client for the campaign generation service.
//!
//! Wraps the service's HTTP endpoints (campaign generation, health) using
//! [`reqwest`]. Adds a per-request timeout, a single bounded retry on
//! transient transport failure, and an explicit in-flight guard so that one
//! generation request is active at a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use adcp_core::config::ServiceConfig;
use adcp_core::types::{CampaignRequest, CampaignResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// HTTP client for a single generation service instance.
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    in_flight: AtomicBool,
}

/// Response of the service's `GET /health` endpoint: overall status plus
/// per-agent service statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub services: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors from the generation client.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The service rejected the request and supplied a message; it is
    /// surfaced to the operator verbatim.
    #[error("{0}")]
    Service(String),

    /// Non-2xx status without a usable error body.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The HTTP request itself failed (connect, timeout, TLS, decode).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A generation request is already pending on this client.
    #[error("a generation request is already in flight")]
    AlreadyInFlight,
}

impl GenerationClient {
    /// Create a client from the service configuration. The configured
    /// timeout applies to every request issued by this client.
    pub fn new(config: &ServiceConfig) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            in_flight: AtomicBool::new(false),
        })
    }

    /// Submit a validated campaign request for generation.
    ///
    /// Sends `POST /generate-campaign` with the request as a JSON body and
    /// parses the response into a [`CampaignResult`]. Transient transport
    /// failures (connect, timeout) are retried up to the configured count;
    /// HTTP error statuses are never retried.
    pub async fn generate(
        &self,
        request: &CampaignRequest,
    ) -> Result<CampaignResult, GenerateError> {
        let _slot = self.acquire_slot()?;
        let url = format!("{}/generate-campaign", self.base_url);

        let mut attempt = 0;
        loop {
            debug!(%url, attempt, advertiser = %request.advertiser_name, "sending generation request");
            match self.http.post(&url).json(request).send().await {
                Ok(response) => {
                    let result: CampaignResult = Self::parse_response(response).await?;
                    info!(
                        advertiser = %result.test_metadata.advertiser,
                        signals = result.signals().len(),
                        products = result.products().len(),
                        "campaign strategy generated"
                    );
                    return Ok(result);
                }
                Err(err) if attempt < self.max_retries && is_transient(&err) => {
                    attempt += 1;
                    warn!(error = %err, attempt, "transient transport failure, retrying");
                }
                Err(err) => return Err(GenerateError::Request(err)),
            }
        }
    }

    /// Query the service's health endpoint (`GET /health`).
    pub async fn health(&self) -> Result<ServiceHealth, GenerateError> {
        let url = format!("{}/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        Self::parse_response(response).await
    }

    /// Claim the single request slot, released when the returned guard
    /// drops. Fails fast instead of queueing a second submission.
    fn acquire_slot(&self) -> Result<InFlightGuard<'_>, GenerateError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GenerateError::AlreadyInFlight)?;
        Ok(InFlightGuard(&self.in_flight))
    }

    /// Parse a response: 2xx bodies deserialize into the expected type,
    /// non-2xx bodies are mined for a `{"error": ...}` message.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenerateError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => Err(GenerateError::Service(parsed.error)),
                Err(_) => Err(GenerateError::Status(status.as_u16())),
            };
        }
        Ok(response.json::<T>().await?)
    }
}

/// Transport failures worth one more attempt. HTTP statuses and body
/// decode errors are deliberately excluded.
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
