//! user_registry - SQLite-backed user registration store
//!
//! Keeps one table of users with unique usernames and exposes four
//! operations over it: create the table, add a user, authenticate a
//! username/password pair, and list the registered users.
//!
//! The backing file comes from `GENERIC_DATA_STORE_URL` (default
//! `sqlite:users.db`) unless [`init_with_url`] pins another one.
//!
//! Call [`init`] or [`init_with_url`] before any other operation. They
//! return a malformed or unreachable URL as an error; the other operations
//! assume the URL has already been checked.

mod registration;
mod storage;
mod userdb;

#[cfg(test)]
mod test_utils;

pub use registration::{
    RegistrationError, add_user, authenticate_user, create_db, display_users, get_user,
    list_users, write_user_list, write_user_list_json,
};

pub use userdb::{UserError, UserRecord};

/// Open the data store and create the users table
pub async fn init() -> Result<(), RegistrationError> {
    storage::init().await?;
    create_db().await?;
    Ok(())
}

/// Like [`init`], but uses `url` instead of `GENERIC_DATA_STORE_URL`.
///
/// Fails if the store was already opened with a different URL.
pub async fn init_with_url(url: &str) -> Result<(), RegistrationError> {
    storage::override_data_store_url(url)?;
    init().await
}
