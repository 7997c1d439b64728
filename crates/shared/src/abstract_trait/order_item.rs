use crate::{
    domain::{
        requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
        responses::OrderItemResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::OrderItem,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderItemRepository = Arc<dyn OrderItemRepositoryTrait + Send + Sync>;
pub type DynOrderItemService = Arc<dyn OrderItemServiceTrait + Send + Sync>;

/// Every mutation also settles the parent order's total in the same
/// transaction, so callers never observe a stale `total_amount`.
#[async_trait]
pub trait OrderItemRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderItem>, RepositoryError>;
    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn find_by_menu_item_id(
        &self,
        menu_item_id: i64,
    ) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn create(
        &self,
        order_id: i64,
        input: &CreateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        input: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn delete_by_order_id(&self, order_id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderItemServiceTrait {
    async fn get_order_items(&self) -> Result<Vec<OrderItemResponse>, ServiceError>;
    async fn get_order_item(&self, id: i64) -> Result<OrderItemResponse, ServiceError>;
    async fn get_order_items_by_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderItemResponse>, ServiceError>;
    async fn get_order_items_by_menu_item(
        &self,
        menu_item_id: i64,
    ) -> Result<Vec<OrderItemResponse>, ServiceError>;
    async fn create_order_item(
        &self,
        order_id: i64,
        input: &CreateOrderItemRequest,
    ) -> Result<OrderItemResponse, ServiceError>;
    async fn update_order_item(
        &self,
        id: i64,
        input: &UpdateOrderItemRequest,
    ) -> Result<OrderItemResponse, ServiceError>;
    async fn delete_order_item(&self, id: i64) -> Result<(), ServiceError>;
    async fn delete_order_items_by_order(&self, order_id: i64) -> Result<(), ServiceError>;
}
