use adsmith_core::error::CoreError;

/// Errors raised by any [`CampaignStore`](crate::CampaignStore) adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A query against Postgres failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The HTTP request to the storage proxy failed (network, DNS, TLS, etc.).
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage proxy returned a non-2xx status code.
    #[error("Storage API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The storage proxy answered with a body of an unexpected shape.
    #[error("Unexpected storage response: {0}")]
    Decode(String),

    /// A write would break a foreign-key relationship.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Persistence(err.to_string())
    }
}
