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
    abstract_trait::DynUserService,
    domain::{
        requests::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest},
        responses::{MessageResponse, UserResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 403, description = "Forbidden")
    ),
    tag = "User"
)]
pub async fn get_users(
    Extension(service): Extension<DynUserService>,
) -> Result<impl IntoResponse, HttpError> {
    let users = service.get_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User detail", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn get_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Username or email already taken")
    ),
    tag = "User"
)]
pub async fn create_user(
    Extension(service): Extension<DynUserService>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn update_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = service.update_user(id, &body).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/password",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Confirmation mismatch")
    ),
    tag = "User"
)]
pub async fn change_password(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<ChangePasswordRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.change_password(id, &body).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/users", get(get_users))
        .route("/api/admin/users", post(create_user))
        .route("/api/admin/users/{id}", get(get_user))
        .route("/api/admin/users/{id}", put(update_user))
        .route("/api/admin/users/{id}/password", put(change_password))
        .route("/api/admin/users/{id}", delete(delete_user))
        .route_layer(middleware::from_fn(role::admin_only))
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
