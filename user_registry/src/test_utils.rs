//! Test utilities module for shared test initialization and helpers
//!
//! Tests that go through the process-wide data store call
//! [`init_test_environment`] first and are marked `#[serial]`.

use std::sync::Once;
use std::sync::atomic::{AtomicU64, Ordering};

/// Centralized test initialization for all tests across the entire crate
///
/// This function ensures that:
/// 1. Test environment variables are loaded from .env_test (with fallback to .env) - **ONCE**
/// 2. The data store is opened and the users table exists
pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });

    if let Err(e) = crate::init().await {
        eprintln!("Warning: Failed to initialize user registry: {e}");
    }
}

/// Username that no other test in this process will use
pub fn unique_username(suffix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let timestamp = chrono::Utc::now().timestamp_millis();
    format!("test-user-{suffix}-{timestamp}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_username_never_repeats() {
        let a = unique_username("same");
        let b = unique_username("same");

        assert_ne!(a, b);
        assert!(a.starts_with("test-user-same-"));
    }
}
