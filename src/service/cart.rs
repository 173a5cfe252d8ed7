use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynProductQueryRepository},
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartLineResponse, CartResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use validator::Validate;

pub struct CartService {
    cart: DynCartRepository,
    product_query: DynProductQueryRepository,
}

impl CartService {
    pub fn new(cart: DynCartRepository, product_query: DynProductQueryRepository) -> Self {
        Self {
            cart,
            product_query,
        }
    }

    /// Advisory stock check only. Stock can change before checkout; the
    /// authoritative re-check happens inside the checkout transaction.
    fn ensure_stock(
        product_name: &str,
        stock: i32,
        requested: i32,
    ) -> Result<(), ServiceError> {
        if stock < requested {
            return Err(ServiceError::InsufficientStock {
                product: product_name.to_string(),
                requested,
                available: stock,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let items = self.cart.find_items(user_id).await?;

        let total = items.iter().map(|i| i.subtotal()).sum();
        let items = items.into_iter().map(Into::into).collect();

        Ok(ApiResponse::success(
            "Cart fetched",
            CartResponse { items, total },
        ))
    }

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartLineResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".into()))?;

        // The addition lands on top of whatever is already in the cart.
        let existing = self
            .cart
            .find_item(user_id, req.product_id)
            .await?
            .map(|item| item.quantity)
            .unwrap_or(0);

        Self::ensure_stock(&product.name, product.stock, existing + req.quantity)?;

        let item = self
            .cart
            .upsert_item(user_id, req.product_id, req.quantity)
            .await?;

        Ok(ApiResponse::success(
            "Item added to cart successfully",
            item.into(),
        ))
    }

    async fn update_quantity(
        &self,
        user_id: i32,
        cart_item_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartLineResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        let items = self.cart.find_items(user_id).await?;
        let line = items
            .iter()
            .find(|i| i.cart_item_id == cart_item_id)
            .ok_or_else(|| ServiceError::NotFound("Cart item not found".into()))?;

        Self::ensure_stock(&line.name, line.stock, req.quantity)?;

        let item = self
            .cart
            .update_quantity(user_id, cart_item_id, req.quantity)
            .await?;

        Ok(ApiResponse::success(
            "Cart item updated successfully",
            item.into(),
        ))
    }

    async fn remove_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        self.cart
            .remove_item(user_id, cart_item_id)
            .await
            .map_err(|err| match err {
                crate::errors::RepositoryError::NotFound => {
                    ServiceError::NotFound("Cart item not found".into())
                }
                other => other.into(),
            })?;

        Ok(ApiResponse::success(
            "Item removed from cart successfully",
            (),
        ))
    }
}
