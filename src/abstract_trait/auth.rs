use crate::{
    domain::{
        requests::{LoginUserRequest, RegisterUserRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(
        &self,
        req: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn login(&self, req: &LoginUserRequest)
    -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
