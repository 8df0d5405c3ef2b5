//! Domain types, validation rules, and prompt construction for campaign
//! content generation.
//!
//! Nothing in this crate performs I/O. Storage lives in `adsmith-db`, the
//! provider client in `adsmith-genai`, and the workflows that tie them
//! together in `adsmith-pipeline`.

pub mod dto;
pub mod error;
pub mod prompt;
pub mod status;
pub mod tone;
pub mod types;
