use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shift {
    pub id: i64,
    pub user_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}
