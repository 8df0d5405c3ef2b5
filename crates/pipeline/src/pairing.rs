//! Creative pairing: one headline with one image under a campaign.
//!
//! A `(campaign, headline, image)` triple maps to at most one creative.
//! Pairing an existing triple reactivates it; unpairing deletes only the
//! creative row.

use adsmith_core::error::CoreError;
use adsmith_db::models::creative::Creative;
use adsmith_db::CampaignStore;

use crate::CAMPAIGN_NOT_FOUND;

pub const HEADLINE_NOT_FOUND: &str = "Headline not found for campaign";
pub const IMAGE_NOT_FOUND: &str = "Image not found for campaign";
pub const CREATIVE_NOT_FOUND: &str = "Creative not found";

/// Pair a headline with an image, returning the new or reactivated creative.
///
/// The three lookups run concurrently; nothing is written unless the
/// campaign exists and both the headline and the image belong to it.
/// Uniqueness under concurrent calls is left to the store's
/// conflict-resolving upsert.
pub async fn pair(
    store: &dyn CampaignStore,
    campaign_id: &str,
    headline_id: &str,
    image_id: &str,
) -> Result<Creative, CoreError> {
    let (campaign, headline, image) = tokio::join!(
        store.find_campaign(campaign_id),
        store.find_headline(headline_id),
        store.find_image(image_id),
    );
    let (campaign, headline, image) = (campaign?, headline?, image?);

    if campaign.is_none() {
        return Err(CoreError::NotFound(CAMPAIGN_NOT_FOUND.to_string()));
    }
    if !headline.is_some_and(|h| h.campaign_id == campaign_id) {
        return Err(CoreError::NotFound(HEADLINE_NOT_FOUND.to_string()));
    }
    if !image.is_some_and(|i| i.campaign_id == campaign_id) {
        return Err(CoreError::NotFound(IMAGE_NOT_FOUND.to_string()));
    }

    let creative = store
        .upsert_creative(campaign_id, headline_id, image_id)
        .await?;
    tracing::info!(
        creative_id = %creative.id,
        campaign_id,
        headline_id,
        image_id,
        "Creative paired"
    );
    Ok(creative)
}

/// Delete a creative, leaving its headline and image in place.
pub async fn unpair(store: &dyn CampaignStore, creative_id: &str) -> Result<Creative, CoreError> {
    let creative = store
        .delete_creative(creative_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(CREATIVE_NOT_FOUND.to_string()))?;
    tracing::info!(creative_id, campaign_id = %creative.campaign_id, "Creative removed");
    Ok(creative)
}
