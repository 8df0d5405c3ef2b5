//! Repository for the `images` table.

use adsmith_core::status::ASSET_READY;
use sqlx::PgPool;

use crate::models::image::Image;

const COLUMNS: &str = "id, image_url, prompt, status, campaign_id, created_at";

/// Provides insert and read operations for images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a single `READY` image of `campaign_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        campaign_id: &str,
        image_url: &str,
        prompt: &str,
    ) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (image_url, prompt, status, campaign_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(image_url)
            .bind(prompt)
            .bind(ASSET_READY)
            .bind(campaign_id)
            .fetch_one(pool)
            .await
    }

    /// Find an image by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a campaign's images in creation order.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images WHERE campaign_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }
}
