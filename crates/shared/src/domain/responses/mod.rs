mod auth;
mod lookup;
mod menu_item;
mod message;
mod order;
mod order_item;
mod payment;
mod shift;
mod table;
mod user;

pub use self::auth::{AuthSession, LoginResponse};
pub use self::lookup::LookupEntryResponse;
pub use self::menu_item::MenuItemResponse;
pub use self::message::MessageResponse;
pub use self::order::OrderResponse;
pub use self::order_item::OrderItemResponse;
pub use self::payment::PaymentResponse;
pub use self::shift::ShiftResponse;
pub use self::table::RestaurantTableResponse;
pub use self::user::UserResponse;
