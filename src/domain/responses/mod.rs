mod api;
mod cart;
mod order;
mod pagination;
mod product;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::cart::{CartItemResponse, CartLineResponse, CartResponse};
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::pagination::Pagination;
pub use self::product::{ProductAdminResponse, ProductResponse};
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
