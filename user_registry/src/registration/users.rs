use subtle::ConstantTimeEq;

use crate::userdb::{UserRecord, UserStore};

use super::errors::RegistrationError;

/// Create the users table if it does not exist yet.
///
/// Safe to call any number of times.
///
/// Requires [`crate::init`] or [`crate::init_with_url`] to have run; that is
/// where a malformed data store URL is reported.
pub async fn create_db() -> Result<(), RegistrationError> {
    UserStore::init().await?;
    tracing::debug!("Users table ready");
    Ok(())
}

/// Register a new user.
///
/// Returns `Ok(false)` and leaves the table untouched if `username` is
/// already registered.
///
/// Requires [`crate::init`] or [`crate::init_with_url`] to have run; that is
/// where a malformed data store URL is reported.
#[tracing::instrument(skip(email, password))]
pub async fn add_user(
    username: &str,
    email: &str,
    password: &str,
) -> Result<bool, RegistrationError> {
    let record = UserRecord::new(
        username.to_string(),
        email.to_string(),
        password.to_string(),
    );

    let added = UserStore::insert_user(record).await?;
    Ok(added)
}

/// Check a username/password pair against the stored record.
///
/// Returns `Ok(false)` for an unknown username as well as for a wrong password.
///
/// Requires [`crate::init`] or [`crate::init_with_url`] to have run; that is
/// where a malformed data store URL is reported.
#[tracing::instrument(skip(password))]
pub async fn authenticate_user(username: &str, password: &str) -> Result<bool, RegistrationError> {
    let Some(user) = UserStore::get_user(username).await? else {
        tracing::info!("Authentication failed: unknown username");
        return Ok(false);
    };

    let matched = passwords_match(&user.password, password);
    if matched {
        tracing::info!("Authentication succeeded");
    } else {
        tracing::info!("Authentication failed: password mismatch");
    }

    Ok(matched)
}

/// Look up a registered user by username.
///
/// Requires [`crate::init`] or [`crate::init_with_url`] to have run; that is
/// where a malformed data store URL is reported.
pub async fn get_user(username: &str) -> Result<Option<UserRecord>, RegistrationError> {
    Ok(UserStore::get_user(username).await?)
}

/// All registered users in insertion order.
///
/// Requires [`crate::init`] or [`crate::init_with_url`] to have run; that is
/// where a malformed data store URL is reported.
pub async fn list_users() -> Result<Vec<UserRecord>, RegistrationError> {
    Ok(UserStore::get_all_users().await?)
}

fn passwords_match(stored: &str, supplied: &str) -> bool {
    stored.as_bytes().ct_eq(supplied.as_bytes()).into()
}
