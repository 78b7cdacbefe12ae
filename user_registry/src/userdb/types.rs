use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One registered user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserRecord {
    /// Database-assigned sequence number, defines insertion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    /// Unique login name
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Stored password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    /// When the user was registered
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a record that has not been stored yet
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            sequence_number: None,
            username,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}

/// Renders the user list line: `Login: {username}, Email: {email}`
impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Login: {}, Email: {}", self.username, self.email)
    }
}
