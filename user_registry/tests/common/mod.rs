use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use tempfile::TempDir;

/// Directory holding this test binary's database file
static TEST_DB_DIR: OnceLock<TempDir> = OnceLock::new();

/// Path of the SQLite file every test in this binary shares
pub fn test_db_path() -> PathBuf {
    TEST_DB_DIR
        .get_or_init(|| {
            tempfile::Builder::new()
                .prefix("user_registry_it")
                .tempdir()
                .expect("Failed to create temp dir")
        })
        .path()
        .join("users.db")
}

pub fn test_db_url() -> String {
    format!("sqlite:{}", test_db_path().display())
}

/// Point the registry at the shared test file and create the table
pub async fn init_registry() {
    user_registry::init_with_url(&test_db_url())
        .await
        .expect("Failed to initialize user registry");
}

/// Username that no other test in this binary will use
pub fn unique_username(suffix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("it-{suffix}-{}-{n}", std::process::id())
}
