use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl UserResponse {
    pub fn from_model(user: User, roles: Vec<String>) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            roles,
        }
    }
}
