use adsmith_genai::OpenAiConfig;

/// Which [`CampaignStore`](adsmith_db::CampaignStore) adapter to run against.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// Direct Postgres access through sqlx.
    Postgres { database_url: String },
    /// A PostgREST-compatible HTTP proxy.
    Rest { base_url: String, api_key: String },
    /// Process-local tables; data is lost on restart.
    Memory,
}

impl StorageConfig {
    /// Adapter name as accepted by `STORAGE_BACKEND`.
    pub fn backend(&self) -> &'static str {
        match self {
            StorageConfig::Postgres { .. } => "postgres",
            StorageConfig::Rest { .. } => "rest",
            StorageConfig::Memory => "memory",
        }
    }

    /// Resolve the adapter settings from a variable lookup.
    ///
    /// Returns a human-readable message when the backend name is unknown or
    /// one of its required variables is missing.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "postgres".into());
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{key} must be set when STORAGE_BACKEND={backend}"))
        };

        match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageConfig::Postgres {
                database_url: required("DATABASE_URL")?,
            }),
            "rest" => Ok(StorageConfig::Rest {
                base_url: required("STORAGE_REST_URL")?,
                api_key: required("STORAGE_REST_KEY")?,
            }),
            "memory" => Ok(StorageConfig::Memory),
            other => Err(format!(
                "STORAGE_BACKEND must be one of postgres, rest, memory (got '{other}')"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the provider key and the storage credentials have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Image generation
    /// runs several provider calls back to back, so this sits well above
    /// the provider timeout.
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    pub provider: OpenAiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `HOST`                  | `0.0.0.0`                   |
    /// | `PORT`                  | `3000`                      |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`     |
    /// | `REQUEST_TIMEOUT_SECS`  | `120`                       |
    /// | `STORAGE_BACKEND`       | `postgres`                  |
    /// | `DATABASE_URL`          | required for `postgres`     |
    /// | `STORAGE_REST_URL`      | required for `rest`         |
    /// | `STORAGE_REST_KEY`      | required for `rest`         |
    /// | `OPENAI_API_KEY`        | required                    |
    /// | `OPENAI_BASE_URL`       | `https://api.openai.com/v1` |
    /// | `OPENAI_CHAT_MODEL`     | `gpt-4o-mini`               |
    /// | `OPENAI_IMAGE_MODEL`    | `dall-e-3`                  |
    /// | `OPENAI_IMAGE_SIZE`     | `1024x1024`                 |
    /// | `OPENAI_TEMPERATURE`    | `0.8`                       |
    /// | `PROVIDER_TIMEOUT_SECS` | `90`                        |
    ///
    /// Panics on invalid or missing required values; misconfiguration
    /// should stop the process before it binds.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = StorageConfig::resolve(|key| std::env::var(key).ok())
            .unwrap_or_else(|msg| panic!("{msg}"));

        let provider = provider_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            provider,
        }
    }
}

fn provider_from_env() -> OpenAiConfig {
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
    let mut provider = OpenAiConfig::with_api_key(api_key);

    if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
        provider.base_url = base_url;
    }
    if let Ok(model) = std::env::var("OPENAI_CHAT_MODEL") {
        provider.chat_model = model;
    }
    if let Ok(model) = std::env::var("OPENAI_IMAGE_MODEL") {
        provider.image_model = model;
    }
    if let Ok(size) = std::env::var("OPENAI_IMAGE_SIZE") {
        provider.image_size = size;
    }
    if let Ok(temperature) = std::env::var("OPENAI_TEMPERATURE") {
        provider.temperature = temperature
            .parse()
            .expect("OPENAI_TEMPERATURE must be a valid f32");
    }
    if let Ok(timeout) = std::env::var("PROVIDER_TIMEOUT_SECS") {
        provider.timeout_secs = timeout
            .parse()
            .expect("PROVIDER_TIMEOUT_SECS must be a valid u64");
    }

    provider
}
