use sqlx::{Pool, Sqlite};

// Types
#[derive(Clone, Debug)]
pub(crate) struct SqliteDataStore {
    pub(super) pool: sqlx::SqlitePool,
}

// Trait
pub(crate) trait DataStore: Send + Sync {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>>;
}

// Store implementations
impl DataStore for SqliteDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        Some(&self.pool)
    }
}
