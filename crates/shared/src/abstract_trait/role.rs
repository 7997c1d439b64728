use crate::{errors::RepositoryError, model::Role};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRoleRepository = Arc<dyn RoleRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RoleRepositoryTrait {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError>;
    async fn create(&self, name: &str) -> Result<Role, RepositoryError>;
}
