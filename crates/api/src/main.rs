use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use adsmith_db::{CampaignStore, MemoryStore, PgStore, RestStore};
use adsmith_genai::{GenerationProvider, OpenAiProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adsmith_api::config::{ServerConfig, StorageConfig};
use adsmith_api::router::build_router;
use adsmith_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = config.storage.backend(),
        "Loaded server configuration"
    );

    // --- Storage ---
    let store = connect_store(&config).await;

    // --- Generation provider ---
    let provider: Arc<dyn GenerationProvider> = Arc::new(
        OpenAiProvider::new(config.provider.clone()).expect("Failed to build provider client"),
    );
    tracing::info!(
        chat_model = %config.provider.chat_model,
        image_model = %config.provider.image_model,
        "Generation provider ready"
    );

    // --- App state ---
    let state = AppState { store, provider };

    // --- Router ---
    let app = build_router(state, &config).expect("Invalid CORS origin");

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "adsmith_api=debug,adsmith_pipeline=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Build the storage adapter named by the configuration.
///
/// The postgres backend is health-checked and migrated before the server
/// binds.
async fn connect_store(config: &ServerConfig) -> Arc<dyn CampaignStore> {
    match &config.storage {
        StorageConfig::Postgres { database_url } => {
            let pool = adsmith_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            adsmith_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            adsmith_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgStore::new(pool))
        }
        StorageConfig::Rest { base_url, api_key } => {
            let store = RestStore::new(
                base_url,
                api_key.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )
            .expect("Failed to build storage proxy client");
            tracing::info!(%base_url, "Using REST storage proxy");
            Arc::new(store)
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
