use crate::middleware::{jwt, role, validate::ValidatedJson};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use shared::{
    abstract_trait::DynTableService,
    domain::{
        requests::{CreateRestaurantTableRequest, StateQuery, UpdateRestaurantTableRequest},
        responses::RestaurantTableResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/tables",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "List of tables", body = Vec<RestaurantTableResponse>)),
    tag = "Table"
)]
pub async fn get_tables(
    Extension(service): Extension<DynTableService>,
) -> Result<impl IntoResponse, HttpError> {
    let tables = service.get_tables().await?;
    Ok(Json(tables))
}

#[utoipa::path(
    get,
    path = "/api/tables/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Table id")),
    responses(
        (status = 200, description = "Table detail", body = RestaurantTableResponse),
        (status = 404, description = "Table not found")
    ),
    tag = "Table"
)]
pub async fn get_table(
    Extension(service): Extension<DynTableService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let table = service.get_table(id).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    path = "/api/tables/number/{number}",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Table number")),
    responses(
        (status = 200, description = "Table with the number", body = RestaurantTableResponse),
        (status = 404, description = "Table not found")
    ),
    tag = "Table"
)]
pub async fn get_table_by_number(
    Extension(service): Extension<DynTableService>,
    Path(number): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let table = service.get_table_by_number(number).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    path = "/api/tables/state/{state}",
    security(("bearer_auth" = [])),
    params(("state" = String, Path, description = "Table state, case-insensitive")),
    responses(
        (status = 200, description = "Tables in the state", body = Vec<RestaurantTableResponse>),
        (status = 400, description = "Unknown table state")
    ),
    tag = "Table"
)]
pub async fn get_tables_by_state(
    Extension(service): Extension<DynTableService>,
    Path(state): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let tables = service.get_tables_by_state(&state).await?;
    Ok(Json(tables))
}

#[utoipa::path(
    patch,
    path = "/api/tables/{id}/state",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Table id"), StateQuery),
    responses(
        (status = 200, description = "State updated", body = RestaurantTableResponse),
        (status = 400, description = "Unknown table state")
    ),
    tag = "Table"
)]
pub async fn update_table_state(
    Extension(service): Extension<DynTableService>,
    Path(id): Path<i64>,
    Query(query): Query<StateQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let table = service.update_table_state(id, &query.state).await?;
    Ok(Json(table))
}

#[utoipa::path(
    patch,
    path = "/api/tables/{tableId}/assign-order/{orderId}",
    security(("bearer_auth" = [])),
    params(
        ("tableId" = i64, Path, description = "Table id"),
        ("orderId" = i64, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order assigned, table forced OCCUPIED", body = RestaurantTableResponse),
        (status = 404, description = "Table or order not found")
    ),
    tag = "Table"
)]
pub async fn assign_order_to_table(
    Extension(service): Extension<DynTableService>,
    Path((table_id, order_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, HttpError> {
    let table = service.assign_order_to_table(table_id, order_id).await?;
    Ok(Json(table))
}

#[utoipa::path(
    post,
    path = "/api/admin/tables",
    security(("bearer_auth" = [])),
    request_body = CreateRestaurantTableRequest,
    responses(
        (status = 201, description = "Table created", body = RestaurantTableResponse),
        (status = 400, description = "Duplicate table number or unknown state")
    ),
    tag = "Table"
)]
pub async fn create_table(
    Extension(service): Extension<DynTableService>,
    ValidatedJson(body): ValidatedJson<CreateRestaurantTableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let table = service.create_table(&body).await?;
    Ok((StatusCode::CREATED, Json(table)))
}

#[utoipa::path(
    put,
    path = "/api/admin/tables/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Table id")),
    request_body = UpdateRestaurantTableRequest,
    responses(
        (status = 200, description = "Table updated", body = RestaurantTableResponse),
        (status = 404, description = "Table not found")
    ),
    tag = "Table"
)]
pub async fn update_table(
    Extension(service): Extension<DynTableService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateRestaurantTableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let table = service.update_table(id, &body).await?;
    Ok(Json(table))
}

#[utoipa::path(
    delete,
    path = "/api/admin/tables/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Table id")),
    responses(
        (status = 204, description = "Table deleted"),
        (status = 400, description = "Table still has an active order"),
        (status = 404, description = "Table not found")
    ),
    tag = "Table"
)]
pub async fn delete_table(
    Extension(service): Extension<DynTableService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_table(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn table_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let staff = OpenApiRouter::new()
        .route("/api/tables", get(get_tables))
        .route("/api/tables/number/{number}", get(get_table_by_number))
        .route("/api/tables/state/{state}", get(get_tables_by_state))
        .route("/api/tables/{id}", get(get_table))
        .route("/api/tables/{id}/state", patch(update_table_state))
        .route(
            "/api/tables/{tableId}/assign-order/{orderId}",
            patch(assign_order_to_table),
        )
        .route_layer(middleware::from_fn(jwt::auth));

    let admin = OpenApiRouter::new()
        .route("/api/admin/tables", post(create_table))
        .route("/api/admin/tables/{id}", put(update_table))
        .route("/api/admin/tables/{id}", delete(delete_table))
        .route_layer(middleware::from_fn(role::admin_only))
        .route_layer(middleware::from_fn(jwt::auth));

    staff
        .merge(admin)
        .layer(Extension(app_state.di_container.table_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
