//! Storage layer: row models, the [`CampaignStore`] port, and its adapters.
//!
//! - [`store::PgStore`] talks to Postgres directly through the
//!   [`repositories`] (sqlx).
//! - [`store::RestStore`] talks to a PostgREST-compatible proxy over HTTP.
//! - [`store::MemoryStore`] keeps everything in process.
//!
//! Workflow code is written once against [`CampaignStore`].

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{CampaignStore, MemoryStore, PgStore, RestStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
