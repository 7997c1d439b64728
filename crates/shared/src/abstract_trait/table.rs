use crate::{
    domain::{
        requests::{CreateRestaurantTableRequest, UpdateRestaurantTableRequest},
        responses::RestaurantTableResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::RestaurantTable,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTableRepository = Arc<dyn TableRepositoryTrait + Send + Sync>;
pub type DynTableService = Arc<dyn TableServiceTrait + Send + Sync>;

#[async_trait]
pub trait TableRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<RestaurantTable>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<RestaurantTable>, RepositoryError>;
    async fn find_by_number(&self, number: i32) -> Result<Option<RestaurantTable>, RepositoryError>;
    async fn find_by_state(&self, state: &str) -> Result<Vec<RestaurantTable>, RepositoryError>;
    async fn exists_by_number(
        &self,
        number: i32,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;
    async fn create(
        &self,
        input: &CreateRestaurantTableRequest,
        state: &str,
    ) -> Result<RestaurantTable, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        input: &UpdateRestaurantTableRequest,
        state: &str,
    ) -> Result<RestaurantTable, RepositoryError>;
    /// `clear_order` drops the current order reference along with the
    /// state change (used when a table goes back to AVAILABLE).
    async fn update_state(
        &self,
        id: i64,
        state: &str,
        clear_order: bool,
    ) -> Result<RestaurantTable, RepositoryError>;
    async fn assign_order(
        &self,
        id: i64,
        order_id: i64,
        state: &str,
    ) -> Result<RestaurantTable, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait TableServiceTrait {
    async fn get_tables(&self) -> Result<Vec<RestaurantTableResponse>, ServiceError>;
    async fn get_table(&self, id: i64) -> Result<RestaurantTableResponse, ServiceError>;
    async fn get_table_by_number(
        &self,
        number: i32,
    ) -> Result<RestaurantTableResponse, ServiceError>;
    async fn get_tables_by_state(
        &self,
        state: &str,
    ) -> Result<Vec<RestaurantTableResponse>, ServiceError>;
    async fn create_table(
        &self,
        input: &CreateRestaurantTableRequest,
    ) -> Result<RestaurantTableResponse, ServiceError>;
    async fn update_table(
        &self,
        id: i64,
        input: &UpdateRestaurantTableRequest,
    ) -> Result<RestaurantTableResponse, ServiceError>;
    async fn update_table_state(
        &self,
        id: i64,
        state: &str,
    ) -> Result<RestaurantTableResponse, ServiceError>;
    async fn assign_order_to_table(
        &self,
        id: i64,
        order_id: i64,
    ) -> Result<RestaurantTableResponse, ServiceError>;
    async fn delete_table(&self, id: i64) -> Result<(), ServiceError>;
}
