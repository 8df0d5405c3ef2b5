pub mod campaign;
pub mod creative;
pub mod generation;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns                        create (POST)
/// /campaigns/list                   list with child counts (GET)
/// /campaigns/{id}                   detail with children (GET)
///
/// /ai/headlines/generate            generate headlines (POST)
/// /ai/images/generate               generate images (POST)
///
/// /creatives                        pair headline + image (POST)
/// /creatives/{id}                   unpair (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campaigns", campaign::router())
        .nest("/ai", generation::router())
        .nest("/creatives", creative::router())
}
