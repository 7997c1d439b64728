use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRequest {
    #[validate(range(min = 1, message = "User ID is required"))]
    #[schema(example = 2)]
    pub user_id: i64,

    #[schema(example = "2026-01-05T09:00:00")]
    pub start_date: NaiveDateTime,

    #[schema(example = "2026-01-05T17:00:00")]
    pub end_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftRequest {
    pub user_id: Option<i64>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}
