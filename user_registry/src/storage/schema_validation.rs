use sqlx::{Pool, Row, Sqlite};

/// Validates that a database table schema matches what we expect
///
/// Column types are compared against the declared type reported by
/// `PRAGMA table_info`, ignoring ASCII case.
pub(crate) async fn validate_sqlite_table_schema<E>(
    pool: &Pool<Sqlite>,
    table_name: &str,
    expected_columns: &[(&str, &str)],
    error_mapper: impl Fn(String) -> E,
) -> Result<(), E> {
    // Check if table exists
    let table_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await
    .map_err(|e| error_mapper(e.to_string()))?;

    if table_count == 0 {
        return Err(error_mapper(format!(
            "Schema validation failed: Table '{table_name}' does not exist"
        )));
    }

    // Query actual schema from database
    let rows = sqlx::query(&format!("PRAGMA table_info({table_name})"))
        .fetch_all(pool)
        .await
        .map_err(|e| error_mapper(e.to_string()))?;

    let actual_columns: Vec<(String, String)> = rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            let type_: String = row.get("type");
            (name, type_)
        })
        .collect();

    // Compare schemas
    for (expected_name, expected_type) in expected_columns {
        let found = actual_columns
            .iter()
            .find(|(name, _)| name == expected_name);

        match found {
            Some((_, actual_type)) if actual_type.eq_ignore_ascii_case(expected_type) => {}
            Some((_, actual_type)) => {
                return Err(error_mapper(format!(
                    "Schema validation failed: Column '{expected_name}' has type '{actual_type}' but expected '{expected_type}'"
                )));
            }
            None => {
                return Err(error_mapper(format!(
                    "Schema validation failed: Missing column '{expected_name}'"
                )));
            }
        }
    }

    // Extra columns are tolerated
    for (actual_name, _) in &actual_columns {
        if !expected_columns
            .iter()
            .any(|(name, _)| *name == actual_name)
        {
            tracing::warn!(
                "Extra column '{}' found in table '{}'",
                actual_name,
                table_name
            );
        }
    }

    Ok(())
}

/// Validates that a single-column unique index (or UNIQUE constraint) covers `column`
pub(crate) async fn validate_sqlite_unique_column<E>(
    pool: &Pool<Sqlite>,
    table_name: &str,
    column: &str,
    error_mapper: impl Fn(String) -> E,
) -> Result<(), E> {
    let indexes = sqlx::query(&format!("PRAGMA index_list({table_name})"))
        .fetch_all(pool)
        .await
        .map_err(|e| error_mapper(e.to_string()))?;

    for index in &indexes {
        let unique: i64 = index.get("unique");
        let partial: i64 = index.get("partial");
        if unique == 0 || partial != 0 {
            continue;
        }

        let index_name: String = index.get("name");
        let columns = sqlx::query(&format!(
            "PRAGMA index_info('{}')",
            index_name.replace('\'', "''")
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| error_mapper(e.to_string()))?;

        let covers_only_column = columns.len() == 1
            && columns
                .iter()
                .all(|row| row.get::<Option<String>, _>("name").as_deref() == Some(column));
        if covers_only_column {
            return Ok(());
        }
    }

    Err(error_mapper(format!(
        "Schema validation failed: Column '{column}' in table '{table_name}' must be UNIQUE"
    )))
}
