//! Error types for the registration operations

use thiserror::Error;

use crate::storage::StorageError;
use crate::userdb::UserError;

/// Errors that can occur while running a registration operation
///
/// A taken username or a wrong password is not an error; those are reported
/// as `false` by `add_user` and `authenticate_user`.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The data store could not be configured or opened
    #[error("Database error: {0}")]
    Database(String),

    /// Error from the user database operations
    #[error("User error: {0}")]
    UserError(UserError),

    /// Writing the user list failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding the user list failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<StorageError> for RegistrationError {
    fn from(err: StorageError) -> Self {
        RegistrationError::Database(err.to_string())
    }
}

impl From<UserError> for RegistrationError {
    fn from(err: UserError) -> Self {
        RegistrationError::UserError(err)
    }
}

impl From<std::io::Error> for RegistrationError {
    fn from(err: std::io::Error) -> Self {
        RegistrationError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegistrationError {
    fn from(err: serde_json::Error) -> Self {
        RegistrationError::Serialization(err.to_string())
    }
}
