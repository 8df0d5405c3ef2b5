//! Headline entity model.

use adsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `headlines` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub id: DbId,
    pub text: String,
    pub status: String,
    pub campaign_id: DbId,
    pub created_at: Timestamp,
}
