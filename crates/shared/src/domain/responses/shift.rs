use crate::model::Shift;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResponse {
    pub id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub user_id: i64,
}

impl From<Shift> for ShiftResponse {
    fn from(value: Shift) -> Self {
        ShiftResponse {
            id: value.id,
            start_date: value.start_date,
            end_date: value.end_date,
            user_id: value.user_id,
        }
    }
}
