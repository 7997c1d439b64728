use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::OrderResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_table_id(&self, table_id: i64) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn items_of(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order plus any inline items and settles the total,
    /// all inside one transaction.
    async fn create_with_items(
        &self,
        input: &CreateOrderRequest,
        state: &str,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;
    /// Updates the order row; a non-empty item list replaces the existing
    /// items wholesale. One transaction.
    async fn update_with_items(
        &self,
        id: i64,
        input: &UpdateOrderRequest,
        state: &str,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;
    async fn update_state(&self, id: i64, state: &str) -> Result<Order, RepositoryError>;
    async fn recalculate_total(&self, id: i64) -> Result<Order, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn get_orders(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn get_order(&self, id: i64) -> Result<OrderResponse, ServiceError>;
    async fn get_orders_by_table(&self, table_id: i64) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn get_orders_by_user(&self, user_id: i64) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn get_orders_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn create_order(&self, input: &CreateOrderRequest)
        -> Result<OrderResponse, ServiceError>;
    async fn update_order(
        &self,
        id: i64,
        input: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError>;
    async fn update_order_state(&self, id: i64, state: &str)
        -> Result<OrderResponse, ServiceError>;
    async fn recalculate_total(&self, id: i64) -> Result<OrderResponse, ServiceError>;
    async fn delete_order(&self, id: i64) -> Result<(), ServiceError>;
}
