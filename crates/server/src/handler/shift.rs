use crate::middleware::{
    jwt::{self, AuthUser},
    role,
    validate::ValidatedJson,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynShiftService,
    domain::{
        requests::{CreateShiftRequest, UpdateShiftRequest},
        responses::ShiftResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/shifts",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "List of shifts", body = Vec<ShiftResponse>)),
    tag = "Shift"
)]
pub async fn get_shifts(
    Extension(service): Extension<DynShiftService>,
) -> Result<impl IntoResponse, HttpError> {
    let shifts = service.get_shifts().await?;
    Ok(Json(shifts))
}

#[utoipa::path(
    get,
    path = "/api/admin/shifts/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Shift id")),
    responses(
        (status = 200, description = "Shift detail", body = ShiftResponse),
        (status = 404, description = "Shift not found")
    ),
    tag = "Shift"
)]
pub async fn get_shift(
    Extension(service): Extension<DynShiftService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let shift = service.get_shift(id).await?;
    Ok(Json(shift))
}

#[utoipa::path(
    get,
    path = "/api/admin/shifts/user/{userId}",
    security(("bearer_auth" = [])),
    params(("userId" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Shifts of the user", body = Vec<ShiftResponse>),
        (status = 404, description = "User not found")
    ),
    tag = "Shift"
)]
pub async fn get_shifts_by_user(
    Extension(service): Extension<DynShiftService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let shifts = service.get_shifts_by_user(user_id).await?;
    Ok(Json(shifts))
}

#[utoipa::path(
    post,
    path = "/api/admin/shifts",
    security(("bearer_auth" = [])),
    request_body = CreateShiftRequest,
    responses(
        (status = 201, description = "Shift created", body = ShiftResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Shift"
)]
pub async fn create_shift(
    Extension(service): Extension<DynShiftService>,
    ValidatedJson(body): ValidatedJson<CreateShiftRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let shift = service.create_shift(&body).await?;
    Ok((StatusCode::CREATED, Json(shift)))
}

#[utoipa::path(
    put,
    path = "/api/admin/shifts/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Shift id")),
    request_body = UpdateShiftRequest,
    responses(
        (status = 200, description = "Shift updated", body = ShiftResponse),
        (status = 404, description = "Shift or user not found")
    ),
    tag = "Shift"
)]
pub async fn update_shift(
    Extension(service): Extension<DynShiftService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateShiftRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let shift = service.update_shift(id, &body).await?;
    Ok(Json(shift))
}

#[utoipa::path(
    delete,
    path = "/api/admin/shifts/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Shift id")),
    responses(
        (status = 204, description = "Shift deleted"),
        (status = 404, description = "Shift not found")
    ),
    tag = "Shift"
)]
pub async fn delete_shift(
    Extension(service): Extension<DynShiftService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_shift(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/shifts/my-shifts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Shifts of the authenticated user", body = Vec<ShiftResponse>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Shift"
)]
pub async fn get_my_shifts(
    Extension(service): Extension<DynShiftService>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let shifts = service.get_shifts_by_user(user.id).await?;
    Ok(Json(shifts))
}

pub fn shift_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin = OpenApiRouter::new()
        .route("/api/admin/shifts", get(get_shifts))
        .route("/api/admin/shifts", post(create_shift))
        .route("/api/admin/shifts/user/{userId}", get(get_shifts_by_user))
        .route("/api/admin/shifts/{id}", get(get_shift))
        .route("/api/admin/shifts/{id}", put(update_shift))
        .route("/api/admin/shifts/{id}", delete(delete_shift))
        .route_layer(middleware::from_fn(role::admin_only))
        .route_layer(middleware::from_fn(jwt::auth));

    let staff = OpenApiRouter::new()
        .route("/api/shifts/my-shifts", get(get_my_shifts))
        .route_layer(middleware::from_fn(role::staff_only))
        .route_layer(middleware::from_fn(jwt::auth));

    admin
        .merge(staff)
        .layer(Extension(app_state.di_container.shift_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
