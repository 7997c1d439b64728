use crate::model::Payment;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i64,
    pub amount: Decimal,
    pub payment_method: String,
    pub payment_status: String,
    pub order_id: i64,
    pub created_at: NaiveDateTime,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        PaymentResponse {
            id: value.id,
            amount: value.amount,
            payment_method: value.payment_method,
            payment_status: value.payment_status,
            order_id: value.order_id,
            created_at: value.created_at,
        }
    }
}
