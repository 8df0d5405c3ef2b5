//! Adapter for a hosted backend-as-a-service that exposes the tables through
//! a PostgREST-compatible HTTP API.
//!
//! The proxy fronts the same schema as `crates/db/migrations`. Column
//! aliases in every `select` make the proxy answer in the models' camelCase
//! shape, so responses deserialize straight into [`crate::models`].

use std::time::Duration;

use adsmith_core::dto::CreateCampaign;
use adsmith_core::status::{ASSET_READY, CREATIVE_ACTIVE};
use adsmith_core::types::{DbId, Timestamp};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::error::StoreError;
use crate::models::campaign::{Campaign, CampaignDetail, CampaignSummary};
use crate::models::creative::Creative;
use crate::models::headline::Headline;
use crate::models::image::Image;
use crate::store::CampaignStore;

const CAMPAIGN_SELECT: &str = "id,name,industry,audience,tone,description,createdAt:created_at";
const HEADLINE_SELECT: &str = "id,text,status,campaignId:campaign_id,createdAt:created_at";
const IMAGE_SELECT: &str =
    "id,imageUrl:image_url,prompt,status,campaignId:campaign_id,createdAt:created_at";
const CREATIVE_SELECT: &str = "id,campaignId:campaign_id,headlineId:headline_id,\
                               imageId:image_id,status,createdAt:created_at";
const SUMMARY_SELECT: &str = "id,name,industry,audience,tone,createdAt:created_at,\
                              headlines(count),images(count),creatives(count)";

/// Child ordering used for embedded collections.
const CREATION_ORDER: &str = "created_at.asc,id.asc";

/// Conflict target for the creative upsert; matches
/// `uq_creatives_campaign_headline_image`.
const CREATIVE_CONFLICT_COLUMNS: &str = "campaign_id,headline_id,image_id";

/// [`CampaignStore`] backed by a PostgREST-compatible HTTP proxy.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// A campaign list row as the proxy returns it: counts arrive as
/// single-element arrays (`"headlines": [{"count": 3}]`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRow {
    id: DbId,
    name: String,
    industry: String,
    audience: String,
    tone: String,
    created_at: Timestamp,
    headlines: Vec<CountRow>,
    images: Vec<CountRow>,
    creatives: Vec<CountRow>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

fn total(rows: &[CountRow]) -> i64 {
    rows.iter().map(|row| row.count).sum()
}

impl From<SummaryRow> for CampaignSummary {
    fn from(row: SummaryRow) -> Self {
        CampaignSummary {
            headline_count: total(&row.headlines),
            image_count: total(&row.images),
            creative_count: total(&row.creatives),
            id: row.id,
            name: row.name,
            industry: row.industry,
            audience: row.audience,
            tone: row.tone,
            created_at: row.created_at,
        }
    }
}

fn detail_select() -> String {
    format!(
        "{CAMPAIGN_SELECT},headlines({HEADLINE_SELECT}),images({IMAGE_SELECT}),creatives({CREATIVE_SELECT})"
    )
}

impl RestStore {
    /// Create an adapter for the proxy at `base_url` (e.g.
    /// `https://project.example.co/rest/v1`), authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Create an adapter reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    // ---- private helpers ----

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}/{table}", self.base_url))
            .header("apikey", self.api_key.as_str())
            .bearer_auth(&self.api_key)
    }

    /// Fetch at most one row of `table` whose `id` equals `id`.
    async fn find_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::GET, table)
            .query(&[("select", select), ("id", filter.as_str()), ("limit", "1")])
            .send()
            .await?;
        let rows: Vec<T> = Self::parse_response(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Ensure the response has a success status code, returning a
    /// [`StoreError::Api`] with the body text otherwise.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Parse a `return=representation` write that must yield exactly one row.
    async fn single_row<T: DeserializeOwned>(
        response: reqwest::Response,
        table: &str,
    ) -> Result<T, StoreError> {
        let rows: Vec<T> = Self::parse_response(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode(format!("write to {table} returned no row")))
    }
}

#[async_trait]
impl CampaignStore for RestStore {
    fn backend(&self) -> &'static str {
        "rest"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let response = self
            .request(Method::GET, "campaigns")
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn create_campaign(&self, input: &CreateCampaign) -> Result<Campaign, StoreError> {
        let body = json!({
            "name": input.name,
            "industry": input.industry,
            "audience": input.audience,
            "tone": input.tone.stored(),
            "description": input.description,
        });
        let response = self
            .request(Method::POST, "campaigns")
            .header("Prefer", "return=representation")
            .query(&[("select", CAMPAIGN_SELECT)])
            .json(&body)
            .send()
            .await?;
        Self::single_row(response, "campaigns").await
    }

    async fn find_campaign(&self, id: &str) -> Result<Option<Campaign>, StoreError> {
        self.find_by_id("campaigns", CAMPAIGN_SELECT, id).await
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, StoreError> {
        let response = self
            .request(Method::GET, "campaigns")
            .query(&[("select", SUMMARY_SELECT), ("order", "created_at.desc")])
            .send()
            .await?;
        let rows: Vec<SummaryRow> = Self::parse_response(response).await?;
        Ok(rows.into_iter().map(CampaignSummary::from).collect())
    }

    async fn find_campaign_detail(&self, id: &str) -> Result<Option<CampaignDetail>, StoreError> {
        let select = detail_select();
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::GET, "campaigns")
            .query(&[
                ("select", select.as_str()),
                ("id", filter.as_str()),
                ("headlines.order", CREATION_ORDER),
                ("images.order", CREATION_ORDER),
                ("creatives.order", CREATION_ORDER),
            ])
            .send()
            .await?;
        let rows: Vec<CampaignDetail> = Self::parse_response(response).await?;
        Ok(rows.into_iter().next())
    }

    async fn create_headlines(
        &self,
        campaign_id: &str,
        texts: &[String],
    ) -> Result<Vec<Headline>, StoreError> {
        // A bulk insert is a single statement on the proxy side, so the batch
        // is atomic.
        let body: Vec<_> = texts
            .iter()
            .map(|text| {
                json!({
                    "text": text,
                    "status": ASSET_READY,
                    "campaign_id": campaign_id,
                })
            })
            .collect();
        let response = self
            .request(Method::POST, "headlines")
            .header("Prefer", "return=representation")
            .query(&[("select", HEADLINE_SELECT)])
            .json(&body)
            .send()
            .await?;
        let created: Vec<Headline> = Self::parse_response(response).await?;
        if created.len() != texts.len() {
            return Err(StoreError::Decode(format!(
                "headline batch returned {} rows, expected {}",
                created.len(),
                texts.len()
            )));
        }
        Ok(created)
    }

    async fn find_headline(&self, id: &str) -> Result<Option<Headline>, StoreError> {
        self.find_by_id("headlines", HEADLINE_SELECT, id).await
    }

    async fn create_image(
        &self,
        campaign_id: &str,
        image_url: &str,
        prompt: &str,
    ) -> Result<Image, StoreError> {
        let body = json!({
            "image_url": image_url,
            "prompt": prompt,
            "status": ASSET_READY,
            "campaign_id": campaign_id,
        });
        let response = self
            .request(Method::POST, "images")
            .header("Prefer", "return=representation")
            .query(&[("select", IMAGE_SELECT)])
            .json(&body)
            .send()
            .await?;
        Self::single_row(response, "images").await
    }

    async fn find_image(&self, id: &str) -> Result<Option<Image>, StoreError> {
        self.find_by_id("images", IMAGE_SELECT, id).await
    }

    async fn upsert_creative(
        &self,
        campaign_id: &str,
        headline_id: &str,
        image_id: &str,
    ) -> Result<Creative, StoreError> {
        // `merge-duplicates` turns the insert into ON CONFLICT DO UPDATE on the
        // unique triple; the id is left to the column default and survives.
        let body = json!({
            "campaign_id": campaign_id,
            "headline_id": headline_id,
            "image_id": image_id,
            "status": CREATIVE_ACTIVE,
        });
        let response = self
            .request(Method::POST, "creatives")
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .query(&[
                ("on_conflict", CREATIVE_CONFLICT_COLUMNS),
                ("select", CREATIVE_SELECT),
            ])
            .json(&body)
            .send()
            .await?;
        Self::single_row(response, "creatives").await
    }

    async fn delete_creative(&self, id: &str) -> Result<Option<Creative>, StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::DELETE, "creatives")
            .header("Prefer", "return=representation")
            .query(&[("id", filter.as_str()), ("select", CREATIVE_SELECT)])
            .send()
            .await?;
        let rows: Vec<Creative> = Self::parse_response(response).await?;
        Ok(rows.into_iter().next())
    }
}
