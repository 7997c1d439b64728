use super::order_item::{CreateOrderItemRequest, UpdateOrderItemRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "Table ID is required"))]
    #[schema(example = 5)]
    pub table_id: i64,

    #[validate(range(min = 1, message = "User ID is required"))]
    #[schema(example = 2)]
    pub user_id: i64,

    #[schema(example = "PENDING")]
    pub order_state: String,

    #[validate(range(min = 1, message = "Customer count must be at least 1"))]
    #[schema(example = 3)]
    pub customer_count: i32,

    #[serde(default)]
    #[validate(nested)]
    pub order_items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(range(min = 1, message = "Table ID is required"))]
    pub table_id: i64,

    #[schema(example = "PREPARING")]
    pub order_state: String,

    #[validate(range(min = 1, message = "Customer count must be at least 1"))]
    pub customer_count: i32,

    #[serde(default)]
    #[validate(nested)]
    pub order_items: Vec<UpdateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct StateQuery {
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    #[param(example = "2026-01-01T00:00:00")]
    pub start_date: String,

    #[param(example = "2026-01-31T23:59:59")]
    pub end_date: String,
}
