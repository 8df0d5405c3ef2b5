//! A scripted [`GenerationProvider`] for tests.
//!
//! Replies are queued up front and consumed in order. When a queue runs dry
//! the provider falls back to an empty headline object or a fresh image URL.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::provider::GenerationProvider;

/// One queued reply to [`GenerationProvider::complete_json`].
#[derive(Debug, Clone)]
pub enum ChatReply {
    Content(String),
    Fail(String),
}

/// One queued reply to [`GenerationProvider::generate_image`].
#[derive(Debug, Clone)]
pub enum ImageReply {
    Url(String),
    NoUrl,
    Fail(String),
}

/// Records every prompt it receives and the peak number of concurrent
/// image calls.
#[derive(Default)]
pub struct ScriptedProvider {
    chat_replies: Mutex<VecDeque<ChatReply>>,
    image_replies: Mutex<VecDeque<ImageReply>>,
    chat_prompts: Mutex<Vec<(String, String)>>,
    image_prompts: Mutex<Vec<String>>,
    images_in_flight: AtomicUsize,
    peak_images_in_flight: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a chat reply whose content is `{"headlines": [{"text": t}, ...]}`.
    pub fn with_headlines(self, texts: &[&str]) -> Self {
        let headlines: Vec<_> = texts
            .iter()
            .map(|text| serde_json::json!({ "text": text }))
            .collect();
        let content = serde_json::json!({ "headlines": headlines }).to_string();
        self.with_chat(ChatReply::Content(content))
    }

    pub fn with_chat(self, reply: ChatReply) -> Self {
        self.chat_replies
            .lock()
            .expect("chat replies lock")
            .push_back(reply);
        self
    }

    pub fn with_image(self, reply: ImageReply) -> Self {
        self.image_replies
            .lock()
            .expect("image replies lock")
            .push_back(reply);
        self
    }

    /// `(system, user)` pairs in call order.
    pub fn chat_prompts(&self) -> Vec<(String, String)> {
        self.chat_prompts.lock().expect("chat prompts lock").clone()
    }

    /// Image prompts in call order.
    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().expect("image prompts lock").clone()
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_prompts.lock().expect("chat prompts lock").len()
    }

    pub fn image_calls(&self) -> usize {
        self.image_prompts.lock().expect("image prompts lock").len()
    }

    /// Highest number of image calls that were in flight at the same time.
    pub fn peak_images_in_flight(&self) -> usize {
        self.peak_images_in_flight.load(Ordering::SeqCst)
    }
}

fn failure(message: String) -> ProviderError {
    ProviderError::ApiError {
        status: 500,
        body: message,
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete_json(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        self.chat_prompts
            .lock()
            .expect("chat prompts lock")
            .push((system.to_string(), user.to_string()));

        let reply = self
            .chat_replies
            .lock()
            .expect("chat replies lock")
            .pop_front();
        match reply {
            Some(ChatReply::Content(content)) => Ok(content),
            Some(ChatReply::Fail(message)) => Err(failure(message)),
            None => Ok(r#"{"headlines": []}"#.to_string()),
        }
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let in_flight = self.images_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_images_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);

        let call_number = {
            let mut prompts = self.image_prompts.lock().expect("image prompts lock");
            prompts.push(prompt.to_string());
            prompts.len()
        };

        // Give any concurrently issued call a chance to overlap.
        tokio::task::yield_now().await;

        let reply = self
            .image_replies
            .lock()
            .expect("image replies lock")
            .pop_front();
        self.images_in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            Some(ImageReply::Url(url)) => Ok(Some(url)),
            Some(ImageReply::NoUrl) => Ok(None),
            Some(ImageReply::Fail(message)) => Err(failure(message)),
            None => Ok(Some(format!("https://images.test/{call_number}.png"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_are_consumed_in_order_then_fall_back() {
        let provider = ScriptedProvider::new()
            .with_headlines(&["one", "two"])
            .with_chat(ChatReply::Fail("boom".into()));

        let first = provider.complete_json("s", "u").await.unwrap();
        assert!(first.contains("\"one\""));
        assert!(provider.complete_json("s", "u").await.is_err());
        assert_eq!(
            provider.complete_json("s", "u").await.unwrap(),
            r#"{"headlines": []}"#
        );
        assert_eq!(provider.chat_calls(), 3);
    }

    #[tokio::test]
    async fn image_fallback_urls_are_numbered_by_call() {
        let provider = ScriptedProvider::new().with_image(ImageReply::NoUrl);
        assert_eq!(provider.generate_image("p").await.unwrap(), None);
        assert_eq!(
            provider.generate_image("p").await.unwrap().as_deref(),
            Some("https://images.test/2.png")
        );
        assert_eq!(provider.peak_images_in_flight(), 1);
    }
}
