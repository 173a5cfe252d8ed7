use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order line joined with the product name. `price` is the unit price in
/// cents snapshotted when the order was placed, not the live product price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItemDetail {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: i64,
}
