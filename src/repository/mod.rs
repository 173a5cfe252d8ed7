mod cart;
mod order;
mod product;
mod user;

pub use self::cart::CartRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::user::UserRepository;
