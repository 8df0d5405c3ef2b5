//! Client library for the generative AI service.
//!
//! [`GenerationProvider`] is the seam the workflows call through;
//! [`OpenAiProvider`] implements it against an OpenAI-compatible HTTP API.

pub mod error;
pub mod models;
pub mod openai;
pub mod provider;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::ProviderError;
pub use openai::{OpenAiConfig, OpenAiProvider};
pub use provider::GenerationProvider;
