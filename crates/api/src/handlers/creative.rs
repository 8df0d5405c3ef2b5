//! Handlers for the `/creatives` resource.

use adsmith_core::dto::CreateCreative;
use adsmith_core::types::DbId;
use adsmith_pipeline::pairing;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppResult, Operation, ResultExt};
use crate::extract::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairedCreative {
    pub id: DbId,
    pub headline_id: DbId,
    pub image_id: DbId,
    pub campaign_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct RemovedCreative {
    pub id: DbId,
}

#[derive(Debug, Serialize)]
pub struct CreativePayload<T: Serialize> {
    pub creative: T,
}

/// POST /api/creatives
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCreative>,
) -> AppResult<Json<ApiResponse<CreativePayload<PairedCreative>>>> {
    let creative = pairing::pair(
        state.store.as_ref(),
        &input.campaign_id,
        &input.headline_id,
        &input.image_id,
    )
    .await
    .during(Operation::CreateCreative)?;

    Ok(Json(ApiResponse::ok(CreativePayload {
        creative: PairedCreative {
            id: creative.id,
            headline_id: creative.headline_id,
            image_id: creative.image_id,
            campaign_id: creative.campaign_id,
        },
    })))
}

/// DELETE /api/creatives/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<CreativePayload<RemovedCreative>>>> {
    let creative = pairing::unpair(state.store.as_ref(), &id)
        .await
        .during(Operation::DeleteCreative)?;

    Ok(Json(ApiResponse::ok(CreativePayload {
        creative: RemovedCreative { id: creative.id },
    })))
}
