//! Repository for the `campaigns` table.

use adsmith_core::dto::CreateCampaign;
use sqlx::PgPool;

use crate::models::campaign::{Campaign, CampaignSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, industry, audience, tone, description, created_at";

/// Provides create and read operations for campaigns. Campaigns are never
/// updated once created.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign, returning the created row.
    ///
    /// The tone is written in its upper-case stored form.
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns (name, industry, audience, tone, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.audience)
            .bind(input.tone.stored())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a campaign by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all campaigns, most recently created first, with child counts.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<CampaignSummary>, sqlx::Error> {
        sqlx::query_as::<_, CampaignSummary>(
            "SELECT c.id, c.name, c.industry, c.audience, c.tone, c.created_at,
                    (SELECT COUNT(*) FROM headlines h WHERE h.campaign_id = c.id) AS headline_count,
                    (SELECT COUNT(*) FROM images i WHERE i.campaign_id = c.id) AS image_count,
                    (SELECT COUNT(*) FROM creatives cr WHERE cr.campaign_id = c.id) AS creative_count
             FROM campaigns c
             ORDER BY c.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
