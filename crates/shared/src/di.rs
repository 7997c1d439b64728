use crate::{
    abstract_trait::{
        DynAuthService, DynHashing, DynMenuItemService, DynOrderItemService, DynOrderService,
        DynPaymentService, DynRoleRepository, DynShiftService, DynTableService, DynUserRepository,
        DynUserService,
    },
    config::ConnectionPool,
    repository::{
        MenuItemRepository, OrderCommandRepository, OrderItemRepository, OrderQueryRepository,
        PaymentRepository, RoleRepository, ShiftRepository, TableRepository, UserRepository,
    },
    service::{
        AuthService, MenuItemService, OrderItemService, OrderService, OrderServiceDeps,
        PaymentService, ShiftService, TableService, UserService,
    },
};
use std::{fmt, sync::Arc};

use crate::abstract_trait::DynJwtService;

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub menu_item_service: DynMenuItemService,
    pub order_service: DynOrderService,
    pub order_item_service: DynOrderItemService,
    pub table_service: DynTableService,
    pub payment_service: DynPaymentService,
    pub shift_service: DynShiftService,
    // Seeding needs the raw repositories before any service is involved.
    pub user_repository: DynUserRepository,
    pub role_repository: DynRoleRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject").finish_non_exhaustive()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps { pool, hash, jwt } = deps;

        let user_repository: DynUserRepository = Arc::new(UserRepository::new(pool.clone()));
        let role_repository: DynRoleRepository = Arc::new(RoleRepository::new(pool.clone()));
        let menu_item_repository = Arc::new(MenuItemRepository::new(pool.clone()));
        let order_query = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command = Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_item_repository = Arc::new(OrderItemRepository::new(pool.clone()));
        let table_repository: Arc<TableRepository> = Arc::new(TableRepository::new(pool.clone()));
        let payment_repository = Arc::new(PaymentRepository::new(pool.clone()));
        let shift_repository = Arc::new(ShiftRepository::new(pool.clone()));

        let auth_service: DynAuthService = Arc::new(AuthService::new(
            user_repository.clone(),
            hash.clone(),
            jwt.clone(),
        ));

        let user_service: DynUserService = Arc::new(UserService::new(
            user_repository.clone(),
            role_repository.clone(),
            hash.clone(),
        ));

        let menu_item_service: DynMenuItemService =
            Arc::new(MenuItemService::new(menu_item_repository));

        let order_service: DynOrderService = Arc::new(OrderService::new(OrderServiceDeps {
            query: order_query.clone(),
            command: order_command,
            table_repository: table_repository.clone(),
            user_repository: user_repository.clone(),
        }));

        let order_item_service: DynOrderItemService = Arc::new(OrderItemService::new(
            order_item_repository,
            order_query.clone(),
        ));

        let table_service: DynTableService = Arc::new(TableService::new(table_repository));

        let payment_service: DynPaymentService =
            Arc::new(PaymentService::new(payment_repository, order_query));

        let shift_service: DynShiftService = Arc::new(ShiftService::new(
            shift_repository,
            user_repository.clone(),
        ));

        Self {
            auth_service,
            user_service,
            menu_item_service,
            order_service,
            order_item_service,
            table_service,
            payment_service,
            shift_service,
            user_repository,
            role_repository,
        }
    }
}
