use anyhow::Context;
use tracing_subscriber::EnvFilter;

use prensa_api::app::{app, AppState};
use prensa_api::auth::PasswordHasher;
use prensa_api::config::AppConfig;
use prensa_api::database::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and friends.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prensa_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env().context("failed to build configuration")?;

    let store = Store::connect(&config.database_url, config.max_connections)
        .context("failed to set up database pool")?;
    let hasher =
        PasswordHasher::new(config.bcrypt_cost).context("failed to set up password hasher")?;

    let state = AppState {
        store: store.clone(),
        hasher,
    };
    let router = app(state, &config.cors_origins);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("prensa-api listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
