use async_trait::async_trait;

use crate::models::user::User;

/// Narrow capability set over the storage engine. The repository depends on
/// this trait alone, never on a concrete pool, so storage can be swapped or
/// mocked behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Insert the user and write the stored row (identifier, timestamps)
    /// back into the passed entity.
    async fn create(&self, user: &mut User) -> Result<(), sqlx::Error>;

    /// All live rows.
    async fn find(&self) -> Result<Vec<User>, sqlx::Error>;

    /// Single live row by primary key; `RowNotFound` when absent.
    async fn first(&self, id: i64) -> Result<User, sqlx::Error>;

    /// Persist the entity's fields and write the stored row, including the
    /// refreshed update timestamp, back into it.
    async fn save(&self, user: &mut User) -> Result<(), sqlx::Error>;

    /// Mark the row as deleted by primary key. Not an error when no live
    /// row matches.
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}
