use crate::{domain::requests::RegisterUserRequest, errors::RepositoryError, model::User};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn create_user(
        &self,
        req: &RegisterUserRequest,
        password_hash: &str,
    ) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError>;
}
