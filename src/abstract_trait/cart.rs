use crate::{
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartLineResponse, CartResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{CartItem, CartItemWithProduct},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_items(&self, user_id: i32)
    -> Result<Vec<CartItemWithProduct>, RepositoryError>;
    async fn find_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;
    /// Insert, or add the quantity onto the existing (user, product) line.
    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn update_quantity(
        &self,
        user_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn remove_item(&self, user_id: i32, cart_item_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartLineResponse>, ServiceError>;
    async fn update_quantity(
        &self,
        user_id: i32,
        cart_item_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartLineResponse>, ServiceError>;
    async fn remove_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
