use crate::{
    abstract_trait::{DynOrderItemRepository, DynOrderQueryRepository, OrderItemServiceTrait},
    domain::{
        requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
        responses::OrderItemResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct OrderItemService {
    order_item_repository: DynOrderItemRepository,
    order_repository: DynOrderQueryRepository,
}

impl OrderItemService {
    pub fn new(
        order_item_repository: DynOrderItemRepository,
        order_repository: DynOrderQueryRepository,
    ) -> Self {
        Self {
            order_item_repository,
            order_repository,
        }
    }

    async fn ensure_order(&self, order_id: i64) -> Result<(), ServiceError> {
        self.order_repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;
        Ok(())
    }
}

#[async_trait]
impl OrderItemServiceTrait for OrderItemService {
    async fn get_order_items(&self) -> Result<Vec<OrderItemResponse>, ServiceError> {
        let items = self.order_item_repository.find_all().await?;
        Ok(items.into_iter().map(OrderItemResponse::from).collect())
    }

    async fn get_order_item(&self, id: i64) -> Result<OrderItemResponse, ServiceError> {
        let item = self
            .order_item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", id))?;

        Ok(OrderItemResponse::from(item))
    }

    async fn get_order_items_by_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderItemResponse>, ServiceError> {
        self.ensure_order(order_id).await?;

        let items = self.order_item_repository.find_by_order_id(order_id).await?;
        Ok(items.into_iter().map(OrderItemResponse::from).collect())
    }

    async fn get_order_items_by_menu_item(
        &self,
        menu_item_id: i64,
    ) -> Result<Vec<OrderItemResponse>, ServiceError> {
        let items = self
            .order_item_repository
            .find_by_menu_item_id(menu_item_id)
            .await?;
        Ok(items.into_iter().map(OrderItemResponse::from).collect())
    }

    async fn create_order_item(
        &self,
        order_id: i64,
        input: &CreateOrderItemRequest,
    ) -> Result<OrderItemResponse, ServiceError> {
        self.ensure_order(order_id).await?;

        let item = self.order_item_repository.create(order_id, input).await?;
        info!("✅ Added item {} to order {order_id}", item.id);

        Ok(OrderItemResponse::from(item))
    }

    async fn update_order_item(
        &self,
        id: i64,
        input: &UpdateOrderItemRequest,
    ) -> Result<OrderItemResponse, ServiceError> {
        self.order_item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", id))?;

        let item = self.order_item_repository.update(id, input).await?;
        Ok(OrderItemResponse::from(item))
    }

    async fn delete_order_item(&self, id: i64) -> Result<(), ServiceError> {
        self.order_item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", id))?;

        self.order_item_repository.delete(id).await?;
        Ok(())
    }

    async fn delete_order_items_by_order(&self, order_id: i64) -> Result<(), ServiceError> {
        self.ensure_order(order_id).await?;

        self.order_item_repository.delete_by_order_id(order_id).await?;
        info!("✅ Cleared items of order {order_id}");
        Ok(())
    }
}
