use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllProducts, errors::RepositoryError, model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Fetching products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(format!("%{}%", req.search.trim()))
        };

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT *
            FROM products
            WHERE $1::text IS NULL OR name ILIKE $1 OR description ILIKE $1
            ORDER BY product_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE $1::text IS NULL OR name ILIKE $1 OR description ILIKE $1
            "#,
        )
        .bind(&search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok((products, total))
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product =
            sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_id = $1")
                .bind(product_id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|err| {
                    error!("❌ Failed to fetch product {}: {:?}", product_id, err);
                    RepositoryError::from(err)
                })?;

        Ok(product)
    }
}
