//! Display projections of a campaign result.
//!
//! Every view is a pure function of a [`adcp_core::CampaignResult`]: the
//! same result always projects to the same view, and absent optional
//! sub-structures degrade to empty lists rather than errors.

pub mod format;
pub mod overview;
pub mod products;
pub mod signals;
pub mod strategy;

pub use overview::{overview, CampaignOverview};
pub use products::{product_cards, ProductCard};
pub use signals::{signal_cards, SignalCard};
pub use strategy::{strategy, CampaignStrategy};
