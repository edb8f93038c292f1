use anyhow::Context;
use chrono::{DateTime, Utc};

pub async fn handle() -> anyhow::Result<()> {
    let store = super::store_from_env()?;

    let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(store.pool())
        .await
        .context("failed to reach the database")?;

    println!("Connection OK, current time: {}", now);

    store.close().await;
    Ok(())
}
