mod auth;
mod menu_item;
mod order;
mod order_item;
mod payment;
mod shift;
mod table;
mod user;

pub use self::auth::AuthService;
pub use self::menu_item::MenuItemService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::order_item::OrderItemService;
pub use self::payment::PaymentService;
pub use self::shift::ShiftService;
pub use self::table::TableService;
pub use self::user::UserService;
