//! Repository for the `headlines` table.

use adsmith_core::status::ASSET_READY;
use sqlx::PgPool;

use crate::models::headline::Headline;

const COLUMNS: &str = "id, text, status, campaign_id, created_at";

/// Provides batch insert and read operations for headlines.
pub struct HeadlineRepo;

impl HeadlineRepo {
    /// Insert every text as a `READY` headline of `campaign_id` inside one
    /// transaction. Either all rows are written or none are.
    ///
    /// Rows are returned in the order of `texts`.
    pub async fn create_batch(
        pool: &PgPool,
        campaign_id: &str,
        texts: &[String],
    ) -> Result<Vec<Headline>, sqlx::Error> {
        let query = format!(
            "INSERT INTO headlines (text, status, campaign_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(texts.len());
        for text in texts {
            let headline = sqlx::query_as::<_, Headline>(&query)
                .bind(text)
                .bind(ASSET_READY)
                .bind(campaign_id)
                .fetch_one(&mut *tx)
                .await?;
            created.push(headline);
        }
        tx.commit().await?;

        Ok(created)
    }

    /// Find a headline by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Headline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM headlines WHERE id = $1");
        sqlx::query_as::<_, Headline>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a campaign's headlines in creation order.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> Result<Vec<Headline>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM headlines WHERE campaign_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Headline>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }
}
