use crate::{
    domain::{
        requests::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// Uniqueness check. `exclude_id` skips the row being updated.
    async fn exists_by_username(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;
    async fn exists_by_email(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;
    async fn exists_with_role(&self, role_name: &str) -> Result<bool, RepositoryError>;
    /// Inserts the user row and its role assignment in one transaction.
    async fn create(
        &self,
        input: &CreateUserRequest,
        password_hash: &str,
        role_id: i64,
    ) -> Result<User, RepositoryError>;
    /// Updates the row and, when `role_id` is set, swaps the role assignment,
    /// both in one transaction.
    async fn update(
        &self,
        id: i64,
        input: &UpdateUserRequest,
        role_id: Option<i64>,
    ) -> Result<User, RepositoryError>;
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn roles_of(&self, user_id: i64) -> Result<Vec<String>, RepositoryError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn get_users(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn get_user(&self, id: i64) -> Result<UserResponse, ServiceError>;
    async fn create_user(&self, input: &CreateUserRequest) -> Result<UserResponse, ServiceError>;
    async fn update_user(
        &self,
        id: i64,
        input: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError>;
    async fn change_password(
        &self,
        id: i64,
        input: &ChangePasswordRequest,
    ) -> Result<(), ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<(), ServiceError>;
}
