use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductAdminResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        let product = self.command.create_product(req).await?;

        info!("✅ Created product {}", product.product_id);

        Ok(ApiResponse::success(
            "Product created successfully",
            product.into(),
        ))
    }

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        let product = self
            .command
            .update_product(product_id, req)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ServiceError::NotFound("Product not found".into()),
                other => other.into(),
            })?;

        Ok(ApiResponse::success(
            "Product updated successfully",
            product.into(),
        ))
    }

    async fn delete_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command
            .delete_product(product_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ServiceError::NotFound("Product not found".into()),
                other => other.into(),
            })?;

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}
