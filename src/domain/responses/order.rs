use crate::model::{OrderItemDetail, OrderWithItems};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    /// Unit price in cents at purchase time.
    pub price: i64,
    pub subtotal: i64,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            price: value.price,
            subtotal: value.price * value.quantity as i64,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub status: String,
    pub total: i64,
    pub shipping_address: String,
    pub payment_method: String,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<OrderWithItems> for OrderResponse {
    fn from(value: OrderWithItems) -> Self {
        OrderResponse {
            id: value.order.order_id,
            status: value.order.status,
            total: value.order.total,
            shipping_address: value.order.shipping_address,
            payment_method: value.order.payment_method,
            items: value.items.into_iter().map(Into::into).collect(),
            created_at: value.order.created_at.map(|dt| dt.to_string()),
            updated_at: value.order.updated_at.map(|dt| dt.to_string()),
        }
    }
}
