use std::{env, sync::LazyLock};

/// Users table name
pub(super) static DB_TABLE_USERS: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_USERS").unwrap_or_else(|_| "users".to_string()));
