mod cart_item;
mod order;
mod order_item;
mod product;
mod user;

pub use self::cart_item::{CartItem, CartItemWithProduct};
pub use self::order::{Order, OrderWithItems};
pub use self::order_item::OrderItemDetail;
pub use self::product::Product;
pub use self::user::User;
