use sqlx::{Pool, Sqlite};

use crate::storage::{validate_sqlite_table_schema, validate_sqlite_unique_column};
use crate::userdb::{errors::UserError, types::UserRecord};

use super::config::DB_TABLE_USERS;

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // Create users table
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            password TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validates that the users table schema matches what we expect
pub(super) async fn validate_user_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();

    // Define expected schema (column name, data type)
    let expected_columns = vec![
        ("sequence_number", "INTEGER"),
        ("username", "TEXT"),
        ("email", "TEXT"),
        ("password", "TEXT"),
        ("created_at", "TIMESTAMP"),
    ];

    validate_sqlite_table_schema(pool, users_table, &expected_columns, UserError::Schema)
        .await?;

    // ON CONFLICT (username) needs a unique index on exactly that column
    validate_sqlite_unique_column(pool, users_table, "username", UserError::Schema).await
}

pub(super) async fn get_all_users_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<UserRecord>, UserError> {
    // Ensure tables exist before any operations - this is critical for in-memory databases
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    let users = sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY sequence_number ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub(super) async fn get_user_sqlite(
    pool: &Pool<Sqlite>,
    username: &str,
) -> Result<Option<UserRecord>, UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    let user = sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE username = ?
        "#
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts the record unless its username is taken.
///
/// Returns `false` without touching the table when the username already exists.
pub(super) async fn insert_user_sqlite(
    pool: &Pool<Sqlite>,
    user: &UserRecord,
) -> Result<bool, UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (username, email, password, created_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (username) DO NOTHING
        "#
    ))
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
