use crate::{
    domain::{
        requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
        responses::MenuItemResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::MenuItem,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMenuItemRepository = Arc<dyn MenuItemRepositoryTrait + Send + Sync>;
pub type DynMenuItemService = Arc<dyn MenuItemServiceTrait + Send + Sync>;

#[async_trait]
pub trait MenuItemRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, RepositoryError>;
    async fn find_by_category(&self, category: &str) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;
    /// Inserts the item and its allergen links in one transaction.
    async fn create(
        &self,
        input: &CreateMenuItemRequest,
        category: &str,
    ) -> Result<MenuItem, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        input: &UpdateMenuItemRequest,
        category: &str,
    ) -> Result<MenuItem, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn allergens_of(&self, menu_item_id: i64) -> Result<Vec<i64>, RepositoryError>;
}

#[async_trait]
pub trait MenuItemServiceTrait {
    async fn get_menu_items(&self) -> Result<Vec<MenuItemResponse>, ServiceError>;
    async fn get_menu_item(&self, id: i64) -> Result<MenuItemResponse, ServiceError>;
    async fn get_menu_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItemResponse>, ServiceError>;
    async fn create_menu_item(
        &self,
        input: &CreateMenuItemRequest,
    ) -> Result<MenuItemResponse, ServiceError>;
    async fn update_menu_item(
        &self,
        id: i64,
        input: &UpdateMenuItemRequest,
    ) -> Result<MenuItemResponse, ServiceError>;
    async fn delete_menu_item(&self, id: i64) -> Result<(), ServiceError>;
}
