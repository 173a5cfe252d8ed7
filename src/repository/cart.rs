use crate::{
    abstract_trait::CartRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{CartItem, CartItemWithProduct},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_items(
        &self,
        user_id: i32,
    ) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, CartItemWithProduct>(
            r#"
            SELECT ci.cart_item_id, ci.product_id, ci.quantity, p.name, p.price, p.stock
            FROM cart_items ci
            JOIN products p ON p.product_id = ci.product_id
            WHERE ci.user_id = $1
            ORDER BY ci.cart_item_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch cart for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        Ok(items)
    }

    async fn find_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            "SELECT * FROM cart_items WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity   = cart_items.quantity + EXCLUDED.quantity,
                          updated_at = current_timestamp
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add product {} to cart for user {}: {:?}",
                product_id, user_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Cart line {} now has quantity {}",
            item.cart_item_id, item.quantity
        );
        Ok(item)
    }

    async fn update_quantity(
        &self,
        user_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            UPDATE cart_items
            SET quantity = $3, updated_at = current_timestamp
            WHERE cart_item_id = $2 AND user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(cart_item_id)
        .bind(quantity)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "🔄 Updated cart line {} to quantity {}",
            item.cart_item_id, item.quantity
        );
        Ok(item)
    }

    async fn remove_item(&self, user_id: i32, cart_item_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result =
            sqlx::query("DELETE FROM cart_items WHERE cart_item_id = $1 AND user_id = $2")
                .bind(cart_item_id)
                .bind(user_id)
                .execute(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Removed cart line {}", cart_item_id);
        Ok(())
    }
}
