//! Shared data model for the AdCP campaign console — request/response
//! contract of the generation service, input validation, and configuration.

pub mod config;
pub mod error;
pub mod types;
pub mod validate;

pub use config::AppConfig;
pub use error::ValidationError;
pub use types::{CampaignDraft, CampaignRequest, CampaignResult};
