mod menu_item;
mod order;
mod order_item;
mod payment;
mod role;
mod shift;
mod table;
mod user;

pub use self::menu_item::MenuItemRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::order_item::OrderItemRepository;
pub use self::payment::PaymentRepository;
pub use self::role::RoleRepository;
pub use self::shift::ShiftRepository;
pub use self::table::TableRepository;
pub use self::user::UserRepository;
