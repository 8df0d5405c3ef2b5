//! Image entity model.

use adsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `images` table. `prompt` is the shared prompt of the
/// generation request that produced it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: DbId,
    pub image_url: String,
    pub prompt: String,
    pub status: String,
    pub campaign_id: DbId,
    pub created_at: Timestamp,
}
