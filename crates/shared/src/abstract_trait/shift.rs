use crate::{
    domain::{
        requests::{CreateShiftRequest, UpdateShiftRequest},
        responses::ShiftResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::Shift,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynShiftRepository = Arc<dyn ShiftRepositoryTrait + Send + Sync>;
pub type DynShiftService = Arc<dyn ShiftServiceTrait + Send + Sync>;

#[async_trait]
pub trait ShiftRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Shift>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Shift>, RepositoryError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Shift>, RepositoryError>;
    async fn create(&self, input: &CreateShiftRequest) -> Result<Shift, RepositoryError>;
    async fn update(&self, id: i64, input: &UpdateShiftRequest) -> Result<Shift, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ShiftServiceTrait {
    async fn get_shifts(&self) -> Result<Vec<ShiftResponse>, ServiceError>;
    async fn get_shift(&self, id: i64) -> Result<ShiftResponse, ServiceError>;
    async fn get_shifts_by_user(&self, user_id: i64) -> Result<Vec<ShiftResponse>, ServiceError>;
    async fn create_shift(&self, input: &CreateShiftRequest) -> Result<ShiftResponse, ServiceError>;
    async fn update_shift(
        &self,
        id: i64,
        input: &UpdateShiftRequest,
    ) -> Result<ShiftResponse, ServiceError>;
    async fn delete_shift(&self, id: i64) -> Result<(), ServiceError>;
}
