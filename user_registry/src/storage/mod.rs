mod data_store;
mod errors;
mod schema_validation;

pub(crate) use data_store::{GENERIC_DATA_STORE, override_data_store_url};
pub(crate) use errors::StorageError;

// Re-export schema validation function for internal use
pub(crate) use schema_validation::{
    validate_sqlite_table_schema, validate_sqlite_unique_column,
};

/// Opens the process-wide data store and checks that the backing file is reachable
pub(crate) async fn init() -> Result<(), StorageError> {
    data_store::check_data_store_url()?;

    let store = GENERIC_DATA_STORE.lock().await;
    let pool = store
        .as_sqlite()
        .ok_or_else(|| StorageError::Storage("Unsupported database type".to_string()))?;

    // Opening one connection creates the file when it is missing
    pool.acquire()
        .await
        .map_err(|e| StorageError::Storage(e.to_string()))?;

    Ok(())
}
