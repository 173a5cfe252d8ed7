use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    domain::{
        requests::{LoginUserRequest, RegisterUserRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct AuthService {
    user: DynUserRepository,
    hash: DynHashing,
    jwt: DynJwtService,
}

pub struct AuthServiceDeps {
    pub user: DynUserRepository,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps { user, hash, jwt } = deps;

        Self { user, hash, jwt }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        if self.user.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Conflict("Email already registered".into()));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;
        let user = self.user.create_user(req, &password_hash).await?;

        info!("✅ Registered user {}", user.user_id);

        Ok(ApiResponse::success(
            "User registered successfully",
            user.into(),
        ))
    }

    async fn login(
        &self,
        req: &LoginUserRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        let user = self
            .user
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        let access_token = self.jwt.generate_token(user.user_id as i64)?;

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse { access_token },
        ))
    }

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .user
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;

        Ok(ApiResponse::success("User fetched", user.into()))
    }
}
