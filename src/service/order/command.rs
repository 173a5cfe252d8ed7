use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};
use validator::Validate;

// Two checkouts contending for the same product rows can lose a
// serialization race; the transaction is retried as a whole before the
// conflict is surfaced to the client.
const MAX_CHECKOUT_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(vec![e.to_string()]))?;

        let mut attempt = 0;
        let order = loop {
            attempt += 1;

            match self.command.checkout(user_id, req).await {
                Ok(order) => break order,
                Err(err) if err.is_retryable() && attempt < MAX_CHECKOUT_ATTEMPTS => {
                    warn!(
                        "🔄 Checkout attempt {} for user {} lost a stock race, retrying: {}",
                        attempt, user_id, err
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(RepositoryError::Conflict(msg)) => {
                    return Err(ServiceError::Conflict(format!(
                        "Checkout conflicted with a concurrent order, please retry: {msg}"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        };

        info!(
            "✅ Order {} created for user {} with {} lines",
            order.order.order_id,
            user_id,
            order.items.len()
        );

        Ok(ApiResponse::success(
            "Order created successfully",
            order.into(),
        ))
    }
}
