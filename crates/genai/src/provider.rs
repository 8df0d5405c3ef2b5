use async_trait::async_trait;

use crate::error::ProviderError;

/// The two generation modes the workflows need.
///
/// Implementations are shared across request tasks and must keep no
/// per-call mutable state. Image calls for one request are issued strictly
/// one after another by the caller; implementations need not guard against
/// parallel submission.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Run one chat completion in JSON-object mode and return the raw
    /// message content. An absent content yields `"{}"`.
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, ProviderError>;

    /// Generate a single image and return its URL, or `None` when the
    /// provider answered successfully but without a URL.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}
