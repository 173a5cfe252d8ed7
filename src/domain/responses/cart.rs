use crate::model::{CartItem, CartItemWithProduct};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    /// Unit price in cents.
    pub price: i64,
    pub quantity: i32,
    pub subtotal: i64,
}

impl From<CartItemWithProduct> for CartItemResponse {
    fn from(value: CartItemWithProduct) -> Self {
        let subtotal = value.subtotal();

        CartItemResponse {
            id: value.cart_item_id,
            product_id: value.product_id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
            subtotal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total: i64,
}

/// Bare cart line for mutation responses, mirroring what was written.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartLineResponse {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<CartItem> for CartLineResponse {
    fn from(value: CartItem) -> Self {
        CartLineResponse {
            id: value.cart_item_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
