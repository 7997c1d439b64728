use crate::model::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub allergens: Vec<String>,
    pub price: Decimal,
    pub category: String,
}

impl MenuItemResponse {
    pub fn from_model(item: MenuItem, allergens: Vec<String>) -> Self {
        MenuItemResponse {
            id: item.id,
            name: item.name,
            description: item.description,
            allergens,
            price: item.price,
            category: item.category,
        }
    }
}
