//! The storage port and its adapters.

use adsmith_core::dto::CreateCampaign;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::campaign::{Campaign, CampaignDetail, CampaignSummary};
use crate::models::creative::Creative;
use crate::models::headline::Headline;
use crate::models::image::Image;

pub mod memory;
pub mod postgres;
pub mod rest;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use rest::RestStore;

/// Campaign, asset, and creative persistence.
///
/// Lookups by id return `Ok(None)` when the row is absent; an `Err` always
/// means the store itself failed. Implementations are shared across request
/// tasks behind an `Arc`.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Short adapter name for logs (`"postgres"`, `"rest"`, `"memory"`).
    fn backend(&self) -> &'static str;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    // -- Campaigns --

    async fn create_campaign(&self, input: &CreateCampaign) -> Result<Campaign, StoreError>;

    async fn find_campaign(&self, id: &str) -> Result<Option<Campaign>, StoreError>;

    /// Newest first, each with headline/image/creative counts.
    async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, StoreError>;

    /// The campaign plus its children, each list in creation order.
    async fn find_campaign_detail(&self, id: &str) -> Result<Option<CampaignDetail>, StoreError>;

    // -- Assets --

    /// Insert all texts as one atomic batch; rows come back in input order.
    async fn create_headlines(
        &self,
        campaign_id: &str,
        texts: &[String],
    ) -> Result<Vec<Headline>, StoreError>;

    async fn find_headline(&self, id: &str) -> Result<Option<Headline>, StoreError>;

    async fn create_image(
        &self,
        campaign_id: &str,
        image_url: &str,
        prompt: &str,
    ) -> Result<Image, StoreError>;

    async fn find_image(&self, id: &str) -> Result<Option<Image>, StoreError>;

    // -- Creatives --

    /// Insert an `ACTIVE` creative or reactivate the existing one for the
    /// same triple. Must be a single conflict-resolving write.
    async fn upsert_creative(
        &self,
        campaign_id: &str,
        headline_id: &str,
        image_id: &str,
    ) -> Result<Creative, StoreError>;

    /// Delete exactly one creative, returning it, or `None` if absent.
    async fn delete_creative(&self, id: &str) -> Result<Option<Creative>, StoreError>;
}
