use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub amount: Decimal,
    pub payment_method: String,
    pub payment_status: String,
    pub order_id: i64,
    pub created_at: NaiveDateTime,
}
