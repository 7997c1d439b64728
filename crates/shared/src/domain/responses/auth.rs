use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub username: String,
    pub csrf_token: String,
    pub message: String,
}

/// Outcome of a successful login. The token never leaves the server
/// except through the session cookie, so it lives outside [`LoginResponse`].
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub username: String,
    pub csrf_token: String,
}
