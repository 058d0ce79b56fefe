//! Service layer for business logic
//!
//! Query validation and detail aggregation, shared by the HTTP handlers.

mod campaign_service;
pub mod summary;

pub use campaign_service::*;
pub use summary::{CampaignDetail, GeneralSummary, PeriodSummary, SiteSummary, summarize};
