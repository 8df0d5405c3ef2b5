//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async queries that
//! accept `&PgPool` as the first argument. [`PgStore`](crate::PgStore)
//! composes them into the [`CampaignStore`](crate::CampaignStore) port.

pub mod campaign_repo;
pub mod creative_repo;
pub mod headline_repo;
pub mod image_repo;

pub use campaign_repo::CampaignRepo;
pub use creative_repo::CreativeRepo;
pub use headline_repo::HeadlineRepo;
pub use image_repo::ImageRepo;
