pub mod check;
pub mod seed;

use anyhow::Context;

use crate::config::AppConfig;
use crate::database::Store;

/// Builds a store from the environment the way the server binary does.
pub(crate) fn store_from_env() -> anyhow::Result<Store> {
    let config = AppConfig::from_env().context("failed to build configuration")?;
    let store = Store::connect(&config.database_url, config.max_connections)
        .context("failed to set up database pool")?;
    Ok(store)
}
