//! Creative entity model: one headline paired with one image.

use adsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `creatives` table.
///
/// `(campaign_id, headline_id, image_id)` is unique
/// (`uq_creatives_campaign_headline_image`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    pub id: DbId,
    pub campaign_id: DbId,
    pub headline_id: DbId,
    pub image_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}
