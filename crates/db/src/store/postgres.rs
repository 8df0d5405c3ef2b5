//! Direct Postgres adapter built on the sqlx repositories.

use adsmith_core::dto::CreateCampaign;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::campaign::{Campaign, CampaignDetail, CampaignSummary};
use crate::models::creative::Creative;
use crate::models::headline::Headline;
use crate::models::image::Image;
use crate::repositories::{CampaignRepo, CreativeRepo, HeadlineRepo, ImageRepo};
use crate::store::CampaignStore;
use crate::DbPool;

/// [`CampaignStore`] backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_campaign(&self, input: &CreateCampaign) -> Result<Campaign, StoreError> {
        Ok(CampaignRepo::create(&self.pool, input).await?)
    }

    async fn find_campaign(&self, id: &str) -> Result<Option<Campaign>, StoreError> {
        Ok(CampaignRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, StoreError> {
        Ok(CampaignRepo::list_with_counts(&self.pool).await?)
    }

    async fn find_campaign_detail(&self, id: &str) -> Result<Option<CampaignDetail>, StoreError> {
        let Some(campaign) = CampaignRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };

        let (headlines, images, creatives) = tokio::try_join!(
            HeadlineRepo::list_by_campaign(&self.pool, id),
            ImageRepo::list_by_campaign(&self.pool, id),
            CreativeRepo::list_by_campaign(&self.pool, id),
        )?;

        Ok(Some(CampaignDetail {
            campaign,
            headlines,
            images,
            creatives,
        }))
    }

    async fn create_headlines(
        &self,
        campaign_id: &str,
        texts: &[String],
    ) -> Result<Vec<Headline>, StoreError> {
        Ok(HeadlineRepo::create_batch(&self.pool, campaign_id, texts).await?)
    }

    async fn find_headline(&self, id: &str) -> Result<Option<Headline>, StoreError> {
        Ok(HeadlineRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_image(
        &self,
        campaign_id: &str,
        image_url: &str,
        prompt: &str,
    ) -> Result<Image, StoreError> {
        Ok(ImageRepo::create(&self.pool, campaign_id, image_url, prompt).await?)
    }

    async fn find_image(&self, id: &str) -> Result<Option<Image>, StoreError> {
        Ok(ImageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn upsert_creative(
        &self,
        campaign_id: &str,
        headline_id: &str,
        image_id: &str,
    ) -> Result<Creative, StoreError> {
        Ok(CreativeRepo::upsert(&self.pool, campaign_id, headline_id, image_id).await?)
    }

    async fn delete_creative(&self, id: &str) -> Result<Option<Creative>, StoreError> {
        Ok(CreativeRepo::delete(&self.pool, id).await?)
    }
}
