use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantTableRequest {
    #[validate(range(min = 1, message = "Table number must be positive"))]
    #[schema(example = 5)]
    pub number: i32,

    #[schema(example = "AVAILABLE")]
    pub table_state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantTableRequest {
    #[validate(range(min = 1, message = "Table number must be positive"))]
    pub number: i32,

    pub table_state: String,

    pub current_order_id: Option<i64>,
}
