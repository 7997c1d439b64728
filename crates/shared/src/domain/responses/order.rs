use super::order_item::OrderItemResponse;
use crate::model::{Order, OrderItem};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub table_id: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub order_items: Vec<OrderItemResponse>,
    pub total_amount: Decimal,
    pub order_state: String,
    pub customer_count: i32,
}

impl OrderResponse {
    pub fn from_model(order: Order, items: Vec<OrderItem>) -> Self {
        OrderResponse {
            id: order.id,
            table_id: order.table_id,
            user_id: order.user_id,
            created_at: order.created_at,
            updated_at: order.updated_at,
            order_items: items.into_iter().map(OrderItemResponse::from).collect(),
            total_amount: order.total_amount,
            order_state: order.order_state,
            customer_count: order.customer_count,
        }
    }
}
