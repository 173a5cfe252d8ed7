use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub cart_item_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One cart line joined with its product, as read by the cart view and by
/// the checkout transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItemWithProduct {
    pub cart_item_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub price: i64,
    pub stock: i32,
}

impl CartItemWithProduct {
    pub fn subtotal(&self) -> i64 {
        self.price * self.quantity as i64
    }
}
