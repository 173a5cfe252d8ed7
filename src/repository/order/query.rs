use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderItemDetail, OrderWithItems},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_items(
        &self,
        conn: &mut sqlx::PgConnection,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        // One batched fetch for all orders instead of a query per order.
        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_item_id, oi.order_id, oi.product_id,
                   p.name AS product_name, oi.quantity, oi.price
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            WHERE oi.order_id = ANY($1)
            ORDER BY oi.order_id, oi.order_item_id
            "#,
        )
        .bind(order_ids)
        .fetch_all(conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<OrderWithItems>, RepositoryError> {
        info!("🔍 Fetching orders for user {}", user_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
        let items = self.fetch_items(&mut conn, &order_ids).await?;

        let mut grouped: HashMap<i32, Vec<OrderItemDetail>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }

        let result = orders
            .into_iter()
            .map(|order| {
                let items = grouped.remove(&order.order_id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect();

        Ok(result)
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Ownership is enforced here: somebody else's order is simply absent.
        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE order_id = $1 AND user_id = $2",
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = self.fetch_items(&mut conn, &[order.order_id]).await?;

        Ok(Some(OrderWithItems { order, items }))
    }
}
