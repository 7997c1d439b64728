mod auth;
mod lookup;
mod menu_item;
mod order;
mod order_item;
mod payment;
mod shift;
mod table;
mod user;

pub use self::auth::auth_routes;
pub use self::lookup::lookup_routes;
pub use self::menu_item::menu_item_routes;
pub use self::order::order_routes;
pub use self::order_item::order_item_routes;
pub use self::payment::payment_routes;
pub use self::shift::shift_routes;
pub use self::table::table_routes;
pub use self::user::user_routes;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::{state::AppState, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_handler,
        auth::me_handler,
        auth::logout_handler,
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::change_password,
        user::delete_user,
        menu_item::get_menu_items,
        menu_item::get_menu_item,
        menu_item::get_menu_items_by_category,
        menu_item::create_menu_item,
        menu_item::update_menu_item,
        menu_item::delete_menu_item,
        order::get_orders,
        order::get_order,
        order::get_orders_by_table,
        order::get_orders_by_user,
        order::get_orders_by_date_range,
        order::create_order,
        order::update_order,
        order::update_order_state,
        order::calculate_order_total,
        order::delete_order,
        order_item::get_order_items,
        order_item::get_order_item,
        order_item::get_order_items_by_order,
        order_item::get_order_items_by_menu_item,
        order_item::create_order_item,
        order_item::update_order_item,
        order_item::delete_order_item,
        order_item::delete_order_items_by_order,
        table::get_tables,
        table::get_table,
        table::get_table_by_number,
        table::get_tables_by_state,
        table::update_table_state,
        table::assign_order_to_table,
        table::create_table,
        table::update_table,
        table::delete_table,
        payment::get_payments,
        payment::get_payment,
        payment::get_payments_by_order,
        payment::get_payments_by_status,
        payment::get_payments_by_date_range,
        payment::delete_payment,
        payment::create_payment,
        payment::update_payment,
        payment::update_payment_status,
        payment::cashier_get_payment,
        payment::cashier_get_payments_by_status,
        shift::get_shifts,
        shift::get_shift,
        shift::get_shifts_by_user,
        shift::create_shift,
        shift::update_shift,
        shift::delete_shift,
        shift::get_my_shifts,
        lookup::get_allergens,
        lookup::get_categories,
        lookup::get_order_states,
        lookup::get_table_states,
        lookup::get_payment_methods,
        lookup::get_payment_statuses,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login, logout and session introspection"),
        (name = "User", description = "User administration"),
        (name = "MenuItem", description = "Menu catalog"),
        (name = "Order", description = "Orders and their totals"),
        (name = "OrderItem", description = "Line items of orders"),
        (name = "Table", description = "Restaurant tables"),
        (name = "Payment", description = "Payments"),
        (name = "Shift", description = "Staff shifts"),
        (name = "Lookup", description = "Static enum listings"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(menu_item_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(order_item_routes(shared_state.clone()))
            .merge(table_routes(shared_state.clone()))
            .merge(payment_routes(shared_state.clone()))
            .merge(shift_routes(shared_state.clone()))
            .merge(lookup_routes());

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/docs");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
