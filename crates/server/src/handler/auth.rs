use crate::middleware::{
    jwt::{self, AuthUser, SESSION_COOKIE},
    validate::ValidatedJson,
};
use axum::{
    Extension, Json,
    http::{StatusCode, header},
    middleware,
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
};
use shared::{
    abstract_trait::DynAuthService,
    config::CookieConfig,
    domain::{
        requests::LoginRequest,
        responses::{LoginResponse, MessageResponse, UserResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Serializes the session cookie by hand so login and logout always emit the
/// same attribute set.
fn session_cookie(token: &str, max_age: i64, cookie: &CookieConfig) -> String {
    let mut parts = vec![
        format!("{SESSION_COOKIE}={token}"),
        "Path=/".to_string(),
        format!("Max-Age={max_age}"),
        "SameSite=Lax".to_string(),
    ];
    if cookie.http_only {
        parts.push("HttpOnly".to_string());
    }
    if cookie.secure {
        parts.push("Secure".to_string());
    }
    parts.join("; ")
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    Extension(state): Extension<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let session = state.di_container.auth_service.login(&body).await?;

    let cookie = session_cookie(
        &session.token,
        state.jwt_config.expiry_seconds(),
        &state.cookie,
    );

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(LoginResponse {
            username: session.username,
            csrf_token: session.csrf_token,
            message: "Login successful".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Auth"
)]
pub async fn me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = service.get_me(user.id).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let cookie = session_cookie("", 0, &state.cookie);

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(MessageResponse::new("Logout successful")),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/api/auth/me", get(me_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route_layer(middleware::from_fn(jwt::auth));

    OpenApiRouter::new()
        .route("/api/auth/login", post(login_handler))
        .merge(protected)
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(app_state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_logout_cookies_share_attributes() {
        let config = CookieConfig {
            secure: true,
            http_only: true,
        };

        let login = session_cookie("abc", 3600, &config);
        let logout = session_cookie("", 0, &config);

        assert_eq!(login, "jwtToken=abc; Path=/; Max-Age=3600; SameSite=Lax; HttpOnly; Secure");
        assert_eq!(logout, "jwtToken=; Path=/; Max-Age=0; SameSite=Lax; HttpOnly; Secure");
    }

    #[test]
    fn insecure_config_drops_the_secure_flag() {
        let config = CookieConfig {
            secure: false,
            http_only: true,
        };

        let cookie = session_cookie("abc", 60, &config);
        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("HttpOnly"));
    }
}
