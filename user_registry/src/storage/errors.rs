use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub(crate) enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
