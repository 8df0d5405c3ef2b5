//! Route definitions for AI generation under `/ai`.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST   /headlines/generate   -> generate_headlines
/// POST   /images/generate      -> generate_images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/headlines/generate", post(generation::generate_headlines))
        .route("/images/generate", post(generation::generate_images))
}
