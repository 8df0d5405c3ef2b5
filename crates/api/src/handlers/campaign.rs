//! Handlers for the `/campaigns` resource.

use adsmith_core::dto::CreateCampaign;
use adsmith_core::error::CoreError;
use adsmith_core::types::DbId;
use adsmith_db::models::campaign::{Campaign, CampaignDetail, CampaignSummary};
use adsmith_pipeline::CAMPAIGN_NOT_FOUND;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult, Operation, ResultExt};
use crate::extract::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CampaignPayload<T: Serialize> {
    pub campaign: T,
}

#[derive(Debug, Serialize)]
pub struct CampaignListPayload {
    pub campaigns: Vec<CampaignSummary>,
}

/// POST /api/campaigns
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCampaign>,
) -> AppResult<Json<ApiResponse<CampaignPayload<Campaign>>>> {
    let campaign = state
        .store
        .create_campaign(&input)
        .await
        .during(Operation::CreateCampaign)?;
    tracing::info!(campaign_id = %campaign.id, tone = %campaign.tone, "Campaign created");
    Ok(Json(ApiResponse::ok(CampaignPayload { campaign })))
}

/// GET /api/campaigns/list
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CampaignListPayload>>> {
    let campaigns = state
        .store
        .list_campaigns()
        .await
        .during(Operation::ListCampaigns)?;
    Ok(Json(ApiResponse::ok(CampaignListPayload { campaigns })))
}

/// GET /api/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<CampaignPayload<CampaignDetail>>>> {
    let campaign = state
        .store
        .find_campaign_detail(&id)
        .await
        .during(Operation::GetCampaign)?
        .ok_or_else(|| {
            AppError::during(
                Operation::GetCampaign,
                CoreError::NotFound(CAMPAIGN_NOT_FOUND.to_string()),
            )
        })?;
    Ok(Json(ApiResponse::ok(CampaignPayload { campaign })))
}
