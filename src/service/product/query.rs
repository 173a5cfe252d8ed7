use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::FindAllProducts,
        responses::{
            ApiResponse, ApiResponsePagination, Pagination, ProductAdminResponse, ProductResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    base_url: String,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, base_url: String) -> Self {
        Self { query, base_url }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        let data = products
            .into_iter()
            .map(|p| ProductResponse::from_model(p, &self.base_url))
            .collect();

        Ok(ApiResponsePagination {
            status: "success".into(),
            message: "Products fetched".into(),
            data,
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".into()))?;

        Ok(ApiResponse::success(
            "Product fetched",
            ProductResponse::from_model(product, &self.base_url),
        ))
    }

    async fn find_all_admin(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductAdminResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        Ok(ApiResponsePagination {
            status: "success".into(),
            message: "Products fetched".into(),
            data: products.into_iter().map(Into::into).collect(),
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }
}
