use std::sync::Arc;

use adsmith_db::CampaignStore;
use adsmith_genai::GenerationProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every field is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage adapter selected by `STORAGE_BACKEND`.
    pub store: Arc<dyn CampaignStore>,
    /// Headline and image generation service.
    pub provider: Arc<dyn GenerationProvider>,
}
