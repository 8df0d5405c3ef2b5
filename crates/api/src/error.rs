use adsmith_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;

/// The HTTP operation a failure happened in.
///
/// Each operation owns a fixed fallback message (returned in place of
/// storage error detail) and the status codes its failures map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateCampaign,
    ListCampaigns,
    GetCampaign,
    GenerateHeadlines,
    GenerateImages,
    CreateCreative,
    DeleteCreative,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::CreateCampaign => "Failed to create campaign",
            Operation::ListCampaigns => "Failed to load campaigns",
            Operation::GetCampaign => "Failed to load campaign",
            Operation::GenerateHeadlines => "Failed to generate headlines",
            Operation::GenerateImages => "Failed to generate images",
            Operation::CreateCreative => "Failed to create creative",
            Operation::DeleteCreative => "Failed to delete creative",
        }
    }

    /// Status for provider and storage failures.
    pub fn failure_status(self) -> StatusCode {
        match self {
            Operation::ListCampaigns => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Status for a missing entity.
    pub fn not_found_status(self) -> StatusCode {
        match self {
            Operation::DeleteCreative => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{success: false, error}`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain error raised while serving `op`.
    #[error("{op:?} failed: {error}")]
    Operation {
        op: Operation,
        #[source]
        error: CoreError,
    },

    /// A malformed or invalid request body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn during(op: Operation, error: impl Into<CoreError>) -> Self {
        AppError::Operation {
            op,
            error: error.into(),
        }
    }

    /// Resolve the status code and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Operation { op, error } => match error {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::NotFound(msg) => (op.not_found_status(), msg.clone()),
                CoreError::EmptyResult(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
                CoreError::Provider(msg) => (op.failure_status(), msg.clone()),
                CoreError::Persistence(detail) => {
                    tracing::error!(operation = ?op, error = %detail, "Storage failure");
                    (op.failure_status(), op.fallback_message().to_string())
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

/// Tag a fallible result with the [`Operation`] it belongs to.
pub trait ResultExt<T> {
    fn during(self, op: Operation) -> AppResult<T>;
}

impl<T, E: Into<CoreError>> ResultExt<T> for Result<T, E> {
    fn during(self, op: Operation) -> AppResult<T> {
        self.map_err(|error| AppError::during(op, error))
    }
}
