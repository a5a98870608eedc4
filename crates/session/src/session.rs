use adcp_core::types::CampaignResult;
use tracing::debug;

/// The single slot holding the most recent generation result.
///
/// A result is stored wholesale on successful generation, replaced by the
/// next success, and dropped on reset; it is never partially updated.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<CampaignResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored result with a freshly generated one.
    pub fn store(&mut self, result: CampaignResult) {
        debug!(
            advertiser = %result.test_metadata.advertiser,
            campaign = %result.test_metadata.campaign_name,
            "storing campaign result"
        );
        self.current = Some(result);
    }

    /// Drop the stored result (new-campaign reset).
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The stored result, if any.
    pub fn current(&self) -> Option<&CampaignResult> {
        self.current.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.current.is_some()
    }
}
