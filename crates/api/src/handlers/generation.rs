//! Handlers for headline and image generation.

use adsmith_core::dto::{GenerateHeadlines, GenerateImages};
use adsmith_core::types::DbId;
use adsmith_pipeline::generation;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{AppResult, Operation, ResultExt};
use crate::extract::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratedHeadline {
    pub id: DbId,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HeadlinesPayload {
    pub headlines: Vec<GeneratedHeadline>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: DbId,
    pub image_url: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImagesPayload {
    pub images: Vec<GeneratedImage>,
}

/// POST /api/ai/headlines/generate
pub async fn generate_headlines(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<GenerateHeadlines>,
) -> AppResult<Json<ApiResponse<HeadlinesPayload>>> {
    let headlines = generation::generate_headlines(
        state.store.as_ref(),
        state.provider.as_ref(),
        &input,
    )
    .await
    .during(Operation::GenerateHeadlines)?;

    let headlines = headlines
        .into_iter()
        .map(|h| GeneratedHeadline {
            id: h.id,
            text: h.text,
        })
        .collect();
    Ok(Json(ApiResponse::ok(HeadlinesPayload { headlines })))
}

/// POST /api/ai/images/generate
pub async fn generate_images(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<GenerateImages>,
) -> AppResult<Json<ApiResponse<ImagesPayload>>> {
    let images = generation::generate_images(
        state.store.as_ref(),
        state.provider.as_ref(),
        &input,
    )
    .await
    .during(Operation::GenerateImages)?;

    let images = images
        .into_iter()
        .map(|i| GeneratedImage {
            id: i.id,
            image_url: i.image_url,
            prompt: i.prompt,
        })
        .collect();
    Ok(Json(ApiResponse::ok(ImagesPayload { images })))
}
