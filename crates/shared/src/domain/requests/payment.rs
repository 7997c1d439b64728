use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[schema(example = "19.00")]
    pub amount: Decimal,

    #[schema(example = "CASH")]
    pub payment_method: String,

    #[schema(example = "PENDING")]
    pub payment_status: String,

    #[validate(range(min = 1, message = "Order ID is required"))]
    #[schema(example = 42)]
    pub order_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub amount: Decimal,
    pub payment_method: String,
    pub payment_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct StatusQuery {
    pub status: String,
}
