mod menu_item;
mod order;
mod order_item;
mod payment;
mod role;
mod shift;
mod table;
mod user;

pub use self::menu_item::MenuItem;
pub use self::order::Order;
pub use self::order_item::OrderItem;
pub use self::payment::Payment;
pub use self::role::Role;
pub use self::shift::Shift;
pub use self::table::RestaurantTable;
pub use self::user::User;
