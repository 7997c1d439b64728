use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    pub user_id: i64,
    pub order_state: String,
    pub total_amount: Decimal,
    pub customer_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
