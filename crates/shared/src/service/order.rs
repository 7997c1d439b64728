use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynTableRepository, DynUserRepository,
        OrderServiceTrait,
    },
    domain::{
        enums::{LookupEnum, OrderState},
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::OrderResponse,
    },
    errors::ServiceError,
    model::Order,
    utils::parse_datetime,
};
use async_trait::async_trait;
use tracing::info;

pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub table_repository: DynTableRepository,
    pub user_repository: DynUserRepository,
}

pub struct OrderService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    table_repository: DynTableRepository,
    user_repository: DynUserRepository,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        Self {
            query: deps.query,
            command: deps.command,
            table_repository: deps.table_repository,
            user_repository: deps.user_repository,
        }
    }

    async fn respond(&self, order: Order) -> Result<OrderResponse, ServiceError> {
        let items = self.query.items_of(order.id).await?;
        Ok(OrderResponse::from_model(order, items))
    }

    async fn respond_all(&self, orders: Vec<Order>) -> Result<Vec<OrderResponse>, ServiceError> {
        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.respond(order).await?);
        }
        Ok(responses)
    }

    async fn ensure_table(&self, table_id: i64) -> Result<(), ServiceError> {
        self.table_repository
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Table", table_id))?;
        Ok(())
    }

    async fn ensure_user(&self, user_id: i64) -> Result<(), ServiceError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;
        Ok(())
    }

    async fn ensure_order(&self, id: i64) -> Result<Order, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id))
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn get_orders(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self.query.find_all().await?;
        self.respond_all(orders).await
    }

    async fn get_order(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        let order = self.ensure_order(id).await?;
        self.respond(order).await
    }

    async fn get_orders_by_table(&self, table_id: i64) -> Result<Vec<OrderResponse>, ServiceError> {
        self.ensure_table(table_id).await?;
        let orders = self.query.find_by_table_id(table_id).await?;
        self.respond_all(orders).await
    }

    async fn get_orders_by_user(&self, user_id: i64) -> Result<Vec<OrderResponse>, ServiceError> {
        self.ensure_user(user_id).await?;
        let orders = self.query.find_by_user_id(user_id).await?;
        self.respond_all(orders).await
    }

    async fn get_orders_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<OrderResponse>, ServiceError> {
        let start = parse_datetime(start_date)?;
        let end = parse_datetime(end_date)?;

        let orders = self.query.find_by_created_between(start, end).await?;
        self.respond_all(orders).await
    }

    async fn create_order(
        &self,
        input: &CreateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let state = OrderState::parse(&input.order_state)?;
        self.ensure_table(input.table_id).await?;
        self.ensure_user(input.user_id).await?;

        let (order, items) = self.command.create_with_items(input, state.as_str()).await?;

        Ok(OrderResponse::from_model(order, items))
    }

    async fn update_order(
        &self,
        id: i64,
        input: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let state = OrderState::parse(&input.order_state)?;
        self.ensure_order(id).await?;
        self.ensure_table(input.table_id).await?;

        let (order, items) = self
            .command
            .update_with_items(id, input, state.as_str())
            .await?;

        Ok(OrderResponse::from_model(order, items))
    }

    async fn update_order_state(
        &self,
        id: i64,
        state: &str,
    ) -> Result<OrderResponse, ServiceError> {
        // No transition guards: any known state can follow any other.
        let state = OrderState::parse(state)?;
        self.ensure_order(id).await?;

        let order = self.command.update_state(id, state.as_str()).await?;
        info!("✅ Order {} moved to {}", order.id, order.order_state);

        self.respond(order).await
    }

    async fn recalculate_total(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        self.ensure_order(id).await?;

        let order = self.command.recalculate_total(id).await?;
        self.respond(order).await
    }

    async fn delete_order(&self, id: i64) -> Result<(), ServiceError> {
        self.ensure_order(id).await?;

        self.command.delete(id).await?;
        info!("✅ Deleted order {id}");
        Ok(())
    }
}
