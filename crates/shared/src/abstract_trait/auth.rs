use crate::{
    domain::{
        requests::LoginRequest,
        responses::{AuthSession, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, input: &LoginRequest) -> Result<AuthSession, ServiceError>;
    async fn get_me(&self, user_id: i64) -> Result<UserResponse, ServiceError>;
}
