//! Repository for the `creatives` table.

use adsmith_core::status::CREATIVE_ACTIVE;
use sqlx::PgPool;

use crate::models::creative::Creative;

const COLUMNS: &str = "id, campaign_id, headline_id, image_id, status, created_at";

/// Provides upsert, delete and read operations for creatives.
pub struct CreativeRepo;

impl CreativeRepo {
    /// Insert an `ACTIVE` creative for the triple, or reactivate the existing
    /// row when the triple is already paired.
    ///
    /// A single statement resolves the conflict against
    /// `uq_creatives_campaign_headline_image`, so concurrent calls for the same
    /// triple converge on one row.
    pub async fn upsert(
        pool: &PgPool,
        campaign_id: &str,
        headline_id: &str,
        image_id: &str,
    ) -> Result<Creative, sqlx::Error> {
        let query = format!(
            "INSERT INTO creatives (campaign_id, headline_id, image_id, status)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_creatives_campaign_headline_image
             DO UPDATE SET status = EXCLUDED.status, updated_at = clock_timestamp()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creative>(&query)
            .bind(campaign_id)
            .bind(headline_id)
            .bind(image_id)
            .bind(CREATIVE_ACTIVE)
            .fetch_one(pool)
            .await
    }

    /// Delete a creative by ID, returning the removed row.
    ///
    /// The referenced headline and image are left untouched.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<Option<Creative>, sqlx::Error> {
        let query = format!("DELETE FROM creatives WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Creative>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a campaign's creatives in creation order.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<Vec<Creative>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM creatives WHERE campaign_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Creative>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }
}
