use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Margherita")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[schema(example = "9.50")]
    pub price: Decimal,

    #[schema(example = "MAIN_COURSE")]
    pub category: String,

    #[serde(default)]
    pub allergen_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: Decimal,

    pub category: String,

    #[serde(default)]
    pub allergen_ids: Vec<i64>,
}
