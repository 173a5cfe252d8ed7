use sqlx::Error as SqlxError;
use thiserror::Error;

// SQLSTATEs that mean the checkout transaction lost a race and is worth
// retrying as a whole.
const RETRYABLE_SQLSTATES: [&str; 3] = ["40001", "40P01", "55P03"];

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Not enough stock available for product: {product}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) => match db_err.code().as_deref() {
                Some(code) if RETRYABLE_SQLSTATES.contains(&code) => {
                    RepositoryError::Conflict(db_err.message().to_string())
                }
                Some("23505") => RepositoryError::AlreadyExists(db_err.message().to_string()),
                Some("23503") => RepositoryError::ForeignKey(db_err.message().to_string()),
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}

impl RepositoryError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::Conflict(_))
    }
}
