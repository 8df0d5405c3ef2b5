//! OpenAI-compatible provider over [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::models::{
    ChatMessage, ChatRequest, ChatResponse, ImageRequest, ImageResponse, ResponseFormat,
};
use crate::provider::GenerationProvider;

/// Content substituted when a completion carries no message content; it
/// parses to an object without headlines.
const EMPTY_JSON_OBJECT: &str = "{}";

/// Connection and model settings for [`OpenAiProvider`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Base URL without a trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub chat_model: String,
    pub image_model: String,
    /// Requested image size, e.g. `1024x1024`.
    pub image_size: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Defaults for everything except the API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            temperature: 0.8,
            timeout_secs: 90,
        }
    }
}

/// HTTP client for an OpenAI-compatible generation service.
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a provider reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, mut config: OpenAiConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { client, config }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ProviderError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{path}", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(%status, path, body = %body, "Provider request failed");
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete_json(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: self.config.chat_model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            response_format: ResponseFormat::json_object(),
            temperature: Some(self.config.temperature),
        };

        tracing::debug!(
            model = %self.config.chat_model,
            prompt_length = system.len() + user.len(),
            "Requesting chat completion"
        );

        let response: ChatResponse = self.post("/chat/completions", &request).await?;
        Ok(response
            .first_content()
            .unwrap_or_else(|| EMPTY_JSON_OBJECT.to_string()))
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let request = ImageRequest {
            model: self.config.image_model.clone(),
            prompt: prompt.to_string(),
            size: self.config.image_size.clone(),
            n: 1,
        };

        tracing::debug!(
            model = %self.config.image_model,
            size = %self.config.image_size,
            "Requesting image generation"
        );

        let response: ImageResponse = self.post("/images/generations", &request).await?;
        Ok(response.first_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_models() {
        let config = OpenAiConfig::with_api_key("sk-test");
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.image_model, "dall-e-3");
        assert_eq!(config.image_size, "1024x1024");
        assert_eq!(config.temperature, 0.8);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let mut config = OpenAiConfig::with_api_key("sk-test");
        config.base_url = "http://localhost:8080/v1/".into();
        let provider = OpenAiProvider::with_client(reqwest::Client::new(), config);
        assert_eq!(provider.config.base_url, "http://localhost:8080/v1");
    }
}
