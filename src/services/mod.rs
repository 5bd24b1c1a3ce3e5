use std::sync::Arc;

use async_trait::async_trait;

use crate::models::user::{
    CreateUserInput, CreatedUser, DeleteResult, SingleUser, UpdateUserInput, UpdatedUser, User,
};
use crate::persistence::repository::UserRepository;
use crate::utils::error::AppError;

/// Business operations over users: map request shapes to the entity,
/// orchestrate the repository, map entities to response shapes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, input: CreateUserInput) -> Result<CreatedUser, AppError>;
    async fn get_user_by_id(&self, id: i64) -> Result<SingleUser, AppError>;
    async fn get_all_users(&self) -> Result<Vec<SingleUser>, AppError>;
    async fn update_user(&self, id: i64, input: UpdateUserInput)
        -> Result<UpdatedUser, AppError>;
    async fn delete_user(&self, id: i64) -> Result<DeleteResult, AppError>;
}

pub struct DefaultUserService {
    repository: Arc<dyn UserRepository>,
}

impl DefaultUserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for DefaultUserService {
    async fn create_user(&self, input: CreateUserInput) -> Result<CreatedUser, AppError> {
        let mut user = User::new(input.name, input.last_name);
        self.repository.create(&mut user).await?;

        Ok(CreatedUser {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            created_at: user.created_at,
        })
    }

    async fn get_user_by_id(&self, id: i64) -> Result<SingleUser, AppError> {
        let user = self.repository.get_by_id(id).await?;

        Ok(SingleUser {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
        })
    }

    async fn get_all_users(&self) -> Result<Vec<SingleUser>, AppError> {
        let users = self.repository.get_all().await?;

        Ok(users
            .into_iter()
            .map(|user| SingleUser {
                id: user.id,
                name: user.name,
                last_name: user.last_name,
            })
            .collect())
    }

    async fn update_user(
        &self,
        id: i64,
        input: UpdateUserInput,
    ) -> Result<UpdatedUser, AppError> {
        // Fetch first so a missing user never reaches the write path.
        let mut user = self.repository.get_by_id(id).await?;
        user.name = input.name;
        user.last_name = input.last_name;

        self.repository.update(id, &mut user).await?;

        Ok(UpdatedUser {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            updated_at: user.updated_at,
        })
    }

    async fn delete_user(&self, id: i64) -> Result<DeleteResult, AppError> {
        self.repository.delete(id).await?;
        Ok(DeleteResult { success: true })
    }
}
