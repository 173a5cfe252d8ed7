use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_all_by_user(user_id).await?;

        Ok(ApiResponse::success(
            "Orders fetched",
            orders.into_iter().map(Into::into).collect(),
        ))
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(user_id, order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".into()))?;

        Ok(ApiResponse::success("Order fetched", order.into()))
    }
}
