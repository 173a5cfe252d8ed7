use crate::{
    domain::{
        requests::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderWithItems,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all_by_user(&self, user_id: i32)
    -> Result<Vec<OrderWithItems>, RepositoryError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<Option<OrderWithItems>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Convert the user's cart into an order in one atomic transaction:
    /// re-check stock under row locks, snapshot prices, decrement stock and
    /// clear the cart, or fail with no effect.
    async fn checkout(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self, user_id: i32) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
