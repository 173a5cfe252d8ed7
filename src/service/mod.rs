mod auth;
mod cart;
mod order;
mod product;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::cart::CartService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
