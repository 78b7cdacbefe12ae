use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{errors::UserError, types::UserRecord};

use super::sqlite::*;

pub(crate) struct UserStore;

impl UserStore {
    /// Create the users table if absent and validate its schema
    pub(crate) async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match store.as_sqlite() {
            Some(pool) => {
                create_tables_sqlite(pool).await?;
                validate_user_tables_sqlite(pool).await?;
                Ok(())
            }
            None => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    /// All users in insertion order
    pub(crate) async fn get_all_users() -> Result<Vec<UserRecord>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_all_users_sqlite(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(skip_all, fields(username = %username))]
    pub(crate) async fn get_user(username: &str) -> Result<Option<UserRecord>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            get_user_sqlite(pool, username).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => {
                tracing::info!(found = true, "User lookup completed");
            }
            Ok(None) => {
                tracing::info!(found = false, "User lookup completed - not found");
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed");
            }
        }

        result
    }

    /// Insert a new user, returning `false` if the username is already taken
    #[tracing::instrument(skip(user), fields(username = %user.username))]
    pub(crate) async fn insert_user(user: UserRecord) -> Result<bool, UserError> {
        tracing::debug!(email = %user.email, "Inserting user");
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_user_sqlite(pool, &user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(true) => {
                tracing::info!("User inserted successfully");
            }
            Ok(false) => {
                tracing::warn!("Username already taken, nothing inserted");
            }
            Err(e) => {
                tracing::error!(error = %e, "User insert failed");
            }
        }

        result
    }
}
