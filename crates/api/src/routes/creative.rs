use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::creative;
use crate::state::AppState;

/// Routes mounted at `/creatives`.
///
/// ```text
/// POST   /              -> create
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(creative::create))
        .route("/{id}", delete(creative::delete))
}
