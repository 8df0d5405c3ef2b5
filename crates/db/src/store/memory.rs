//! In-process adapter for local development and tests.
//!
//! Mirrors the relational rules of the SQL schema: foreign keys are checked
//! on insert, the creative triple is unique, and every write happens under
//! one lock so the headline batch and the creative upsert are atomic.

use adsmith_core::dto::CreateCampaign;
use adsmith_core::status::{ASSET_READY, CREATIVE_ACTIVE};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::campaign::{Campaign, CampaignDetail, CampaignSummary};
use crate::models::creative::Creative;
use crate::models::headline::Headline;
use crate::models::image::Image;
use crate::store::CampaignStore;

/// Rows are kept in insertion order, which doubles as creation order.
#[derive(Default)]
struct Tables {
    campaigns: Vec<Campaign>,
    headlines: Vec<Headline>,
    images: Vec<Image>,
    creatives: Vec<Creative>,
}

impl Tables {
    fn has_campaign(&self, id: &str) -> bool {
        self.campaigns.iter().any(|c| c.id == id)
    }

    fn require_campaign(&self, id: &str) -> Result<(), StoreError> {
        if self.has_campaign(id) {
            Ok(())
        } else {
            Err(StoreError::Constraint(format!(
                "campaign {id} does not exist"
            )))
        }
    }
}

/// [`CampaignStore`] holding every table in memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored headlines across all campaigns.
    pub async fn headline_count(&self) -> usize {
        self.tables.read().await.headlines.len()
    }

    /// Number of stored images across all campaigns.
    pub async fn image_count(&self) -> usize {
        self.tables.read().await.images.len()
    }

    /// Number of stored creatives across all campaigns.
    pub async fn creative_count(&self) -> usize {
        self.tables.read().await.creatives.len()
    }
}

#[async_trait]
impl CampaignStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_campaign(&self, input: &CreateCampaign) -> Result<Campaign, StoreError> {
        let campaign = Campaign {
            id: new_id(),
            name: input.name.clone(),
            industry: input.industry.clone(),
            audience: input.audience.clone(),
            tone: input.tone.stored().to_string(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        self.tables.write().await.campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn find_campaign(&self, id: &str) -> Result<Option<Campaign>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.campaigns.iter().find(|c| c.id == id).cloned())
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, StoreError> {
        let tables = self.tables.read().await;
        let summaries = tables
            .campaigns
            .iter()
            .rev()
            .map(|c| CampaignSummary {
                id: c.id.clone(),
                name: c.name.clone(),
                industry: c.industry.clone(),
                audience: c.audience.clone(),
                tone: c.tone.clone(),
                created_at: c.created_at,
                headline_count: tables.headlines.iter().filter(|h| h.campaign_id == c.id).count()
                    as i64,
                image_count: tables.images.iter().filter(|i| i.campaign_id == c.id).count() as i64,
                creative_count: tables.creatives.iter().filter(|cr| cr.campaign_id == c.id).count()
                    as i64,
            })
            .collect();
        Ok(summaries)
    }

    async fn find_campaign_detail(&self, id: &str) -> Result<Option<CampaignDetail>, StoreError> {
        let tables = self.tables.read().await;
        let Some(campaign) = tables.campaigns.iter().find(|c| c.id == id).cloned() else {
            return Ok(None);
        };
        Ok(Some(CampaignDetail {
            campaign,
            headlines: tables
                .headlines
                .iter()
                .filter(|h| h.campaign_id == id)
                .cloned()
                .collect(),
            images: tables
                .images
                .iter()
                .filter(|i| i.campaign_id == id)
                .cloned()
                .collect(),
            creatives: tables
                .creatives
                .iter()
                .filter(|cr| cr.campaign_id == id)
                .cloned()
                .collect(),
        }))
    }

    async fn create_headlines(
        &self,
        campaign_id: &str,
        texts: &[String],
    ) -> Result<Vec<Headline>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_campaign(campaign_id)?;

        let created: Vec<Headline> = texts
            .iter()
            .map(|text| Headline {
                id: new_id(),
                text: text.clone(),
                status: ASSET_READY.to_string(),
                campaign_id: campaign_id.to_string(),
                created_at: Utc::now(),
            })
            .collect();
        tables.headlines.extend(created.iter().cloned());
        Ok(created)
    }

    async fn find_headline(&self, id: &str) -> Result<Option<Headline>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.headlines.iter().find(|h| h.id == id).cloned())
    }

    async fn create_image(
        &self,
        campaign_id: &str,
        image_url: &str,
        prompt: &str,
    ) -> Result<Image, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_campaign(campaign_id)?;

        let image = Image {
            id: new_id(),
            image_url: image_url.to_string(),
            prompt: prompt.to_string(),
            status: ASSET_READY.to_string(),
            campaign_id: campaign_id.to_string(),
            created_at: Utc::now(),
        };
        tables.images.push(image.clone());
        Ok(image)
    }

    async fn find_image(&self, id: &str) -> Result<Option<Image>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.images.iter().find(|i| i.id == id).cloned())
    }

    async fn upsert_creative(
        &self,
        campaign_id: &str,
        headline_id: &str,
        image_id: &str,
    ) -> Result<Creative, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_campaign(campaign_id)?;
        if !tables.headlines.iter().any(|h| h.id == headline_id) {
            return Err(StoreError::Constraint(format!(
                "headline {headline_id} does not exist"
            )));
        }
        if !tables.images.iter().any(|i| i.id == image_id) {
            return Err(StoreError::Constraint(format!(
                "image {image_id} does not exist"
            )));
        }

        if let Some(existing) = tables.creatives.iter_mut().find(|cr| {
            cr.campaign_id == campaign_id && cr.headline_id == headline_id && cr.image_id == image_id
        }) {
            existing.status = CREATIVE_ACTIVE.to_string();
            return Ok(existing.clone());
        }

        let creative = Creative {
            id: new_id(),
            campaign_id: campaign_id.to_string(),
            headline_id: headline_id.to_string(),
            image_id: image_id.to_string(),
            status: CREATIVE_ACTIVE.to_string(),
            created_at: Utc::now(),
        };
        tables.creatives.push(creative.clone());
        Ok(creative)
    }

    async fn delete_creative(&self, id: &str) -> Result<Option<Creative>, StoreError> {
        let mut tables = self.tables.write().await;
        let position = tables.creatives.iter().position(|cr| cr.id == id);
        Ok(position.map(|index| tables.creatives.remove(index)))
    }
}
