use crate::model::RestaurantTable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTableResponse {
    pub id: i64,
    pub number: i32,
    pub current_order_id: Option<i64>,
    pub table_state: String,
}

impl From<RestaurantTable> for RestaurantTableResponse {
    fn from(value: RestaurantTable) -> Self {
        RestaurantTableResponse {
            id: value.id,
            number: value.number,
            current_order_id: value.current_order_id,
            table_state: value.table_state,
        }
    }
}
