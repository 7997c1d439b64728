mod auth;
mod menu_item;
mod order;
mod order_item;
mod payment;
mod shift;
mod table;
mod user;

pub use self::auth::LoginRequest;
pub use self::menu_item::{CreateMenuItemRequest, UpdateMenuItemRequest};
pub use self::order::{CreateOrderRequest, DateRangeQuery, StateQuery, UpdateOrderRequest};
pub use self::order_item::{CreateOrderItemRequest, UpdateOrderItemRequest};
pub use self::payment::{CreatePaymentRequest, StatusQuery, UpdatePaymentRequest};
pub use self::shift::{CreateShiftRequest, UpdateShiftRequest};
pub use self::table::{CreateRestaurantTableRequest, UpdateRestaurantTableRequest};
pub use self::user::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest};
