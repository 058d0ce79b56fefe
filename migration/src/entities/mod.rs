pub mod campaign;
pub mod campaign_period;
pub mod campaign_site;

pub use campaign::Entity as CampaignEntity;
pub use campaign_period::Entity as CampaignPeriodEntity;
pub use campaign_site::Entity as CampaignSiteEntity;
