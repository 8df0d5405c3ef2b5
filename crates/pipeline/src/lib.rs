//! Campaign workflows written once against the storage and provider ports.
//!
//! - [`generation`]: headline and image generation with cardinality rules.
//! - [`pairing`]: creative upsert and removal with cross-entity checks.

pub mod generation;
pub mod pairing;

use adsmith_core::error::CoreError;
use adsmith_db::models::campaign::Campaign;
use adsmith_db::CampaignStore;

/// Message returned when a referenced campaign does not exist.
pub const CAMPAIGN_NOT_FOUND: &str = "Campaign not found";

/// Load a campaign or fail with [`CoreError::NotFound`].
pub async fn require_campaign(
    store: &dyn CampaignStore,
    campaign_id: &str,
) -> Result<Campaign, CoreError> {
    store
        .find_campaign(campaign_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(CAMPAIGN_NOT_FOUND.to_string()))
}
