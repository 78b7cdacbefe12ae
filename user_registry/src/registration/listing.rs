use std::io::{self, Write};

use crate::userdb::UserRecord;

use super::errors::RegistrationError;
use super::users::list_users;

/// Write one `Login: {username}, Email: {email}` line per user
pub fn write_user_list<W: Write>(
    users: &[UserRecord],
    writer: &mut W,
) -> Result<(), RegistrationError> {
    for user in users {
        writeln!(writer, "{user}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the users as a JSON array; passwords are not included
pub fn write_user_list_json<W: Write>(
    users: &[UserRecord],
    writer: &mut W,
) -> Result<(), RegistrationError> {
    serde_json::to_writer_pretty(&mut *writer, users)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Print every registered user to stdout, in insertion order
///
/// Call [`crate::init`] or [`crate::init_with_url`] first.
pub async fn display_users() -> Result<(), RegistrationError> {
    let users = list_users().await?;
    tracing::debug!(count = users.len(), "Displaying users");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_user_list(&users, &mut handle)
}
