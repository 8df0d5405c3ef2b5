//! Campaign entity model and read projections.

use adsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::creative::Creative;
use crate::models::headline::Headline;
use crate::models::image::Image;

/// A row from the `campaigns` table. `tone` holds the stored upper-case form.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: DbId,
    pub name: String,
    pub industry: String,
    pub audience: String,
    pub tone: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A campaign list entry annotated with the size of each child collection.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: DbId,
    pub name: String,
    pub industry: String,
    pub audience: String,
    pub tone: String,
    pub created_at: Timestamp,
    pub headline_count: i64,
    pub image_count: i64,
    pub creative_count: i64,
}

/// A campaign together with all of its children, each in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub headlines: Vec<Headline>,
    pub images: Vec<Image>,
    pub creatives: Vec<Creative>,
}
