use crate::middleware::{jwt, validate::ValidatedJson};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynOrderItemService,
    domain::{
        requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
        responses::OrderItemResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/order-items",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "List of order items", body = Vec<OrderItemResponse>)),
    tag = "OrderItem"
)]
pub async fn get_order_items(
    Extension(service): Extension<DynOrderItemService>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.get_order_items().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/order-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Order item detail", body = OrderItemResponse),
        (status = 404, description = "Order item not found")
    ),
    tag = "OrderItem"
)]
pub async fn get_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.get_order_item(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/api/order-items/order/{orderId}",
    security(("bearer_auth" = [])),
    params(("orderId" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Items of the order", body = Vec<OrderItemResponse>),
        (status = 404, description = "Order not found")
    ),
    tag = "OrderItem"
)]
pub async fn get_order_items_by_order(
    Extension(service): Extension<DynOrderItemService>,
    Path(order_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.get_order_items_by_order(order_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/order-items/menu-item/{menuItemId}",
    security(("bearer_auth" = [])),
    params(("menuItemId" = i64, Path, description = "Menu item id")),
    responses((status = 200, description = "Order items referencing the menu item", body = Vec<OrderItemResponse>)),
    tag = "OrderItem"
)]
pub async fn get_order_items_by_menu_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(menu_item_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.get_order_items_by_menu_item(menu_item_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/order-items/order/{orderId}",
    security(("bearer_auth" = [])),
    params(("orderId" = i64, Path, description = "Order id")),
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Item created, parent total recomputed", body = OrderItemResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "OrderItem"
)]
pub async fn create_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(order_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<CreateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.create_order_item(order_id, &body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/order-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order item id")),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Item updated, parent total recomputed", body = OrderItemResponse),
        (status = 404, description = "Order item not found")
    ),
    tag = "OrderItem"
)]
pub async fn update_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.update_order_item(id, &body).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/order-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order item id")),
    responses(
        (status = 204, description = "Item deleted, parent total recomputed"),
        (status = 404, description = "Order item not found")
    ),
    tag = "OrderItem"
)]
pub async fn delete_order_item(
    Extension(service): Extension<DynOrderItemService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/order-items/order/{orderId}",
    security(("bearer_auth" = [])),
    params(("orderId" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "All items of the order deleted"),
        (status = 404, description = "Order not found")
    ),
    tag = "OrderItem"
)]
pub async fn delete_order_items_by_order(
    Extension(service): Extension<DynOrderItemService>,
    Path(order_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order_items_by_order(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/order-items", get(get_order_items))
        .route("/api/order-items/{id}", get(get_order_item))
        .route("/api/order-items/{id}", put(update_order_item))
        .route("/api/order-items/{id}", delete(delete_order_item))
        .route("/api/order-items/order/{orderId}", get(get_order_items_by_order))
        .route("/api/order-items/order/{orderId}", post(create_order_item))
        .route(
            "/api/order-items/order/{orderId}",
            delete(delete_order_items_by_order),
        )
        .route(
            "/api/order-items/menu-item/{menuItemId}",
            get(get_order_items_by_menu_item),
        )
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.order_item_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
