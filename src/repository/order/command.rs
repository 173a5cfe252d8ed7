use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateOrderRequest,
    errors::RepositoryError,
    model::{CartItemWithProduct, Order, OrderItemDetail, OrderWithItems},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn checkout(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Bounded lock wait; a timeout surfaces as a retryable conflict.
        sqlx::query("SET LOCAL lock_timeout = '5s'")
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        // One consistent read of the cart with its products. Product rows are
        // locked in ascending product_id order so two checkouts sharing
        // products cannot deadlock.
        let lines = sqlx::query_as::<_, CartItemWithProduct>(
            r#"
            SELECT ci.cart_item_id, ci.product_id, ci.quantity, p.name, p.price, p.stock
            FROM cart_items ci
            JOIN products p ON p.product_id = ci.product_id
            WHERE ci.user_id = $1
            ORDER BY ci.product_id
            FOR UPDATE OF p
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if lines.is_empty() {
            return Err(RepositoryError::EmptyCart);
        }

        // Authoritative stock check under the row locks; the advisory check
        // at cart time may be stale by now.
        for line in &lines {
            if line.stock < line.quantity {
                return Err(RepositoryError::InsufficientStock {
                    product: line.name.clone(),
                    requested: line.quantity,
                    available: line.stock,
                });
            }
        }

        let total: i64 = lines.iter().map(CartItemWithProduct::subtotal).sum();

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders
                (user_id, total, status, shipping_address, payment_method, created_at, updated_at)
            VALUES ($1, $2, 'pending', $3, $4, current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(total)
        .bind(&req.shipping_address)
        .bind(&req.payment_method)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        let mut items = Vec::with_capacity(lines.len());

        for line in &lines {
            // Snapshot the price read under the lock, not a later one.
            let (order_item_id,): (i32,) = sqlx::query_as(
                r#"
                INSERT INTO order_items
                    (order_id, product_id, quantity, price, created_at, updated_at)
                VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
                RETURNING order_item_id
                "#,
            )
            .bind(order.order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            // The row is locked and already validated; the guard keeps the
            // stock invariant even if that ever ceases to hold.
            let updated = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $1, updated_at = current_timestamp
                WHERE product_id = $2 AND stock >= $1
                "#,
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            if updated.rows_affected() == 0 {
                return Err(RepositoryError::InsufficientStock {
                    product: line.name.clone(),
                    requested: line.quantity,
                    available: line.stock,
                });
            }

            items.push(OrderItemDetail {
                order_item_id,
                order_id: order.order_id,
                product_id: line.product_id,
                product_name: line.name.clone(),
                quantity: line.quantity,
                price: line.price,
            });
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} for user {} (total {})",
            order.order_id, user_id, order.total
        );

        Ok(OrderWithItems { order, items })
    }
}
