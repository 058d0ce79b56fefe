pub mod campaigns;
pub mod error_code;
pub mod health;
pub mod helpers;
pub mod types;

pub use campaigns::campaign_routes;
pub use error_code::ErrorCode;
pub use health::{HealthService, health_routes};
pub use helpers::{not_found, query_error_handler};
pub use types::{CampaignPage, ErrorBody, HealthResponse};
