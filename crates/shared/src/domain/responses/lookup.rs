use crate::domain::enums::LookupEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a lookup listing, materialized from a static enum.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LookupEntryResponse {
    pub id: i64,
    pub name: String,
}

impl LookupEntryResponse {
    pub fn listing<T: LookupEnum>() -> Vec<Self> {
        T::variants()
            .iter()
            .map(|v| LookupEntryResponse {
                id: v.id(),
                name: v.as_str().to_string(),
            })
            .collect()
    }
}
