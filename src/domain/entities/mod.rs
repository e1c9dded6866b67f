//! Domain Entities

mod campaign;

pub use campaign::CampaignContext;
