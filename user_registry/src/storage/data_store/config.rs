//! Data store configuration

use std::{
    env,
    str::FromStr,
    sync::{LazyLock, OnceLock},
};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tokio::sync::Mutex;

use super::types::{DataStore, SqliteDataStore};
use crate::storage::errors::StorageError;

/// Backing file used when `GENERIC_DATA_STORE_URL` is not set
const DEFAULT_DATA_STORE_URL: &str = "sqlite:users.db";

/// URL the data store opens with; pinned on first read
static DATA_STORE_URL: OnceLock<String> = OnceLock::new();

pub(crate) static GENERIC_DATA_STORE: LazyLock<Mutex<Box<dyn DataStore>>> = LazyLock::new(|| {
    let store_url = data_store_url();

    tracing::info!("Initializing data store with url: {}", store_url);

    // `storage::init` parses the URL first, so this only fails when the store
    // is touched before initialization.
    let opts = SqliteConnectOptions::from_str(store_url)
        .expect("Failed to parse SQLite connection string")
        .create_if_missing(true);

    let store = Box::new(SqliteDataStore {
        pool: SqlitePool::connect_lazy_with(opts),
    }) as Box<dyn DataStore>;

    tracing::info!("Connected to database: url={}", store_url);

    Mutex::new(store)
});

fn resolve_data_store_url(from_env: Option<String>) -> String {
    from_env
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_STORE_URL.to_string())
}

fn data_store_url() -> &'static str {
    DATA_STORE_URL
        .get_or_init(|| resolve_data_store_url(env::var("GENERIC_DATA_STORE_URL").ok()))
        .as_str()
}

/// Pins the data store URL ahead of the environment.
///
/// Succeeds if nothing has been pinned yet or the same URL already was.
pub(crate) fn override_data_store_url(url: &str) -> Result<(), StorageError> {
    SqliteConnectOptions::from_str(url)
        .map_err(|e| StorageError::Configuration(format!("Invalid data store url '{url}': {e}")))?;

    let pinned = DATA_STORE_URL.get_or_init(|| url.to_string());
    if pinned == url {
        Ok(())
    } else {
        Err(StorageError::Configuration(format!(
            "Data store url is already set to '{pinned}'"
        )))
    }
}

pub(crate) fn check_data_store_url() -> Result<(), StorageError> {
    let url = data_store_url();
    SqliteConnectOptions::from_str(url)
        .map(|_| ())
        .map_err(|e| StorageError::Configuration(format!("Invalid data store url '{url}': {e}")))
}
