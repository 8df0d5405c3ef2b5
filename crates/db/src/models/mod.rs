//! Row models returned by every storage adapter.
//!
//! Models serialize with camelCase keys, which is also the shape the REST
//! adapter asks the proxy for (via column aliases), so one set of types
//! serves sqlx, the proxy, and the HTTP responses.

pub mod campaign;
pub mod creative;
pub mod headline;
pub mod image;
