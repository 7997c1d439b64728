use crate::middleware::{jwt, role, validate::ValidatedJson};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynMenuItemService,
    domain::{
        requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
        responses::MenuItemResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/menu-items",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "List of menu items", body = Vec<MenuItemResponse>)),
    tag = "MenuItem"
)]
pub async fn get_menu_items(
    Extension(service): Extension<DynMenuItemService>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.get_menu_items().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/menu-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Menu item detail", body = MenuItemResponse),
        (status = 404, description = "Menu item not found")
    ),
    tag = "MenuItem"
)]
pub async fn get_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.get_menu_item(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/api/menu-items/category/{category}",
    security(("bearer_auth" = [])),
    params(("category" = String, Path, description = "Category name, case-insensitive")),
    responses(
        (status = 200, description = "Menu items in the category", body = Vec<MenuItemResponse>),
        (status = 400, description = "Unknown category")
    ),
    tag = "MenuItem"
)]
pub async fn get_menu_items_by_category(
    Extension(service): Extension<DynMenuItemService>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.get_menu_items_by_category(&category).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/admin/menu-items",
    security(("bearer_auth" = [])),
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Duplicate name or unknown category")
    ),
    tag = "MenuItem"
)]
pub async fn create_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    ValidatedJson(body): ValidatedJson<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.create_menu_item(&body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/admin/menu-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Menu item id")),
    request_body = UpdateMenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemResponse),
        (status = 404, description = "Menu item not found")
    ),
    tag = "MenuItem"
)]
pub async fn update_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateMenuItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.update_menu_item(id, &body).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/admin/menu-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Menu item id")),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 404, description = "Menu item not found")
    ),
    tag = "MenuItem"
)]
pub async fn delete_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn menu_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let read = OpenApiRouter::new()
        .route("/api/menu-items", get(get_menu_items))
        .route("/api/menu-items/{id}", get(get_menu_item))
        .route(
            "/api/menu-items/category/{category}",
            get(get_menu_items_by_category),
        )
        .route_layer(middleware::from_fn(jwt::auth));

    let admin = OpenApiRouter::new()
        .route("/api/admin/menu-items", post(create_menu_item))
        .route("/api/admin/menu-items/{id}", put(update_menu_item))
        .route("/api/admin/menu-items/{id}", delete(delete_menu_item))
        .route_layer(middleware::from_fn(role::admin_only))
        .route_layer(middleware::from_fn(jwt::auth));

    read.merge(admin)
        .layer(Extension(app_state.di_container.menu_item_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
