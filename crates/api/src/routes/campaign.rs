//! Route definitions for the `/campaigns` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// POST   /              -> create
/// GET    /list          -> list
/// GET    /{id}          -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(campaign::create))
        .route("/list", get(campaign::list))
        .route("/{id}", get(campaign::get_by_id))
}
