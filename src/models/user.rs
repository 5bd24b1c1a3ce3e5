use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table. The identifier and the timestamps are owned
/// by the persistence layer; callers never set them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// A user that has not been stored yet. The gateway fills in the
    /// identifier and timestamps on insert.
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            last_name: last_name.into(),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserInput {
    pub name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedUser {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Response shape shared by the single-user and list endpoints; timestamps
/// are not exposed there.
#[derive(Debug, Clone, Serialize)]
pub struct SingleUser {
    pub id: i64,
    pub name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedUser {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub success: bool,
}
