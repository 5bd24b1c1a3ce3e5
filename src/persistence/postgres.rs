use async_trait::async_trait;
use sqlx::PgPool;

use super::gateway::UserGateway;
use crate::models::user::User;

/// `UserGateway` backed by a PostgreSQL pool. Rows are soft-deleted: deletes
/// stamp `deleted_at` and every read filters on `deleted_at IS NULL`.
#[derive(Clone)]
pub struct PgUserGateway {
    pool: PgPool,
}

impl PgUserGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserGateway for PgUserGateway {
    async fn create(&self, user: &mut User) -> Result<(), sqlx::Error> {
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, last_name) VALUES ($1, $2) \
             RETURNING id, name, last_name, created_at, updated_at, deleted_at",
        )
        .bind(&user.name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await?;

        *user = row;
        Ok(())
    }

    async fn find(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, last_name, created_at, updated_at, deleted_at \
             FROM users WHERE deleted_at IS NULL",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn first(&self, id: i64) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, last_name, created_at, updated_at, deleted_at \
             FROM users WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    async fn save(&self, user: &mut User) -> Result<(), sqlx::Error> {
        let row = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, last_name = $3, updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, name, last_name, created_at, updated_at, deleted_at",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await?;

        *user = row;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
