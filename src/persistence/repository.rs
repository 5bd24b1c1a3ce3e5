use std::sync::Arc;

use async_trait::async_trait;

use super::gateway::UserGateway;
use crate::models::user::User;
use crate::utils::error::AppError;

/// Entity lifecycle operations over the `users` table. The repository is
/// the sole owner of lifecycle transitions; every storage failure, a missing
/// row included, surfaces as `AppError::Database`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &mut User) -> Result<(), AppError>;
    async fn get_by_id(&self, id: i64) -> Result<User, AppError>;
    async fn get_all(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, id: i64, user: &mut User) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct GatewayUserRepository {
    gateway: Arc<dyn UserGateway>,
}

impl GatewayUserRepository {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UserRepository for GatewayUserRepository {
    async fn create(&self, user: &mut User) -> Result<(), AppError> {
        self.gateway.create(user).await?;
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        Ok(self.gateway.first(id).await?)
    }

    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.gateway.find().await?)
    }

    async fn update(&self, id: i64, user: &mut User) -> Result<(), AppError> {
        // Re-read the full record so only name and last name change on save.
        let mut existing = self.gateway.first(id).await?;
        existing.name = user.name.clone();
        existing.last_name = user.last_name.clone();

        self.gateway.save(&mut existing).await?;
        *user = existing;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.gateway.delete(id).await?;
        Ok(())
    }
}
