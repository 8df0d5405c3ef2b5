use adsmith_core::error::CoreError;

/// Errors from the generation provider layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl From<ProviderError> for CoreError {
    fn from(err: ProviderError) -> Self {
        CoreError::Provider(err.to_string())
    }
}
