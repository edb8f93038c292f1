use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Process configuration, read once at startup and passed explicitly. There
/// is no global instance; whoever needs a value receives it from `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string (DATABASE_URL, required).
    pub database_url: String,
    /// Listen port: PRENSA_PORT, then PORT, then 3000.
    pub port: u16,
    /// CORS allow-list. Empty means permissive CORS.
    pub cors_origins: Vec<String>,
    /// Connection pool size (DATABASE_MAX_CONNECTIONS, default 5).
    pub max_connections: u32,
    /// bcrypt cost factor (PRENSA_BCRYPT_COST, default 10).
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Builds the configuration from the environment. The binaries load
    /// `.env` via dotenvy before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        // Allow tests or deployments to override port via env
        let port = env::var("PRENSA_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        let cors_origins = env::var("PRENSA_CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let bcrypt_cost = env::var("PRENSA_BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            port,
            cors_origins,
            max_connections,
            bcrypt_cost,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
