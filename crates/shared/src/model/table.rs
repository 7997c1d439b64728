use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RestaurantTable {
    pub id: i64,
    pub number: i32,
    pub table_state: String,
    pub current_order_id: Option<i64>,
}
