mod auth;
mod cart;
mod order;
mod product;

pub use self::auth::{LoginUserRequest, RegisterUserRequest};
pub use self::cart::{AddCartItemRequest, UpdateCartItemRequest};
pub use self::order::{CreateOrderRequest, PaymentMethod};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
