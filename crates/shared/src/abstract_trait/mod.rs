mod auth;
mod hashing;
mod jwt;
mod menu_item;
mod order;
mod order_item;
mod payment;
mod role;
mod shift;
mod table;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::menu_item::{
    DynMenuItemRepository, DynMenuItemService, MenuItemRepositoryTrait, MenuItemServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::order_item::{
    DynOrderItemRepository, DynOrderItemService, OrderItemRepositoryTrait, OrderItemServiceTrait,
};
pub use self::payment::{
    DynPaymentRepository, DynPaymentService, PaymentRepositoryTrait, PaymentServiceTrait,
};
pub use self::role::{DynRoleRepository, RoleRepositoryTrait};
pub use self::shift::{DynShiftRepository, DynShiftService, ShiftRepositoryTrait, ShiftServiceTrait};
pub use self::table::{DynTableRepository, DynTableService, TableRepositoryTrait, TableServiceTrait};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
