use std::sync::Arc;

use async_trait::async_trait;

use crate::models::user::{
    CreateUserInput, CreatedUser, DeleteResult, SingleUser, UpdateUserInput, UpdatedUser,
};
use crate::services::UserService;
use crate::utils::error::AppError;

/// Abstraction the handlers depend on instead of a concrete service, so the
/// HTTP layer can be exercised against a substitute.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserFacade: Send + Sync {
    async fn create_user(&self, input: CreateUserInput) -> Result<CreatedUser, AppError>;
    async fn get_user_by_id(&self, id: i64) -> Result<SingleUser, AppError>;
    async fn get_all_users(&self) -> Result<Vec<SingleUser>, AppError>;
    async fn update_user(&self, id: i64, input: UpdateUserInput)
        -> Result<UpdatedUser, AppError>;
    async fn delete_user(&self, id: i64) -> Result<DeleteResult, AppError>;
}

/// Pass-through to the service; adds no behavior.
pub struct DefaultUserFacade {
    service: Arc<dyn UserService>,
}

impl DefaultUserFacade {
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserFacade for DefaultUserFacade {
    async fn create_user(&self, input: CreateUserInput) -> Result<CreatedUser, AppError> {
        self.service.create_user(input).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<SingleUser, AppError> {
        self.service.get_user_by_id(id).await
    }

    async fn get_all_users(&self) -> Result<Vec<SingleUser>, AppError> {
        self.service.get_all_users().await
    }

    async fn update_user(
        &self,
        id: i64,
        input: UpdateUserInput,
    ) -> Result<UpdatedUser, AppError> {
        self.service.update_user(id, input).await
    }

    async fn delete_user(&self, id: i64) -> Result<DeleteResult, AppError> {
        self.service.delete_user(id).await
    }
}
