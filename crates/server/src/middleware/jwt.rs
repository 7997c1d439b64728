use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::HttpError};

pub const SESSION_COOKIE: &str = "jwtToken";

/// Identity of the caller, injected by [`auth`] for downstream handlers
/// and the role guards.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub roles: Vec<String>,
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = token.ok_or_else(|| {
        HttpError::Unauthorized("You are not logged in, please provide token".to_string())
    })?;

    let claims = jwt.verify_token(&token)?;

    req.extensions_mut().insert(AuthUser {
        id: claims.user_id,
        username: claims.username,
        roles: claims.roles,
    });

    Ok(next.run(req).await)
}
