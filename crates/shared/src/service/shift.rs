use crate::{
    abstract_trait::{DynShiftRepository, DynUserRepository, ShiftServiceTrait},
    domain::{
        requests::{CreateShiftRequest, UpdateShiftRequest},
        responses::ShiftResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct ShiftService {
    shift_repository: DynShiftRepository,
    user_repository: DynUserRepository,
}

impl ShiftService {
    pub fn new(shift_repository: DynShiftRepository, user_repository: DynUserRepository) -> Self {
        Self {
            shift_repository,
            user_repository,
        }
    }

    async fn ensure_user(&self, user_id: i64) -> Result<(), ServiceError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;
        Ok(())
    }
}

#[async_trait]
impl ShiftServiceTrait for ShiftService {
    async fn get_shifts(&self) -> Result<Vec<ShiftResponse>, ServiceError> {
        let shifts = self.shift_repository.find_all().await?;
        Ok(shifts.into_iter().map(ShiftResponse::from).collect())
    }

    async fn get_shift(&self, id: i64) -> Result<ShiftResponse, ServiceError> {
        let shift = self
            .shift_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shift", id))?;

        Ok(ShiftResponse::from(shift))
    }

    async fn get_shifts_by_user(&self, user_id: i64) -> Result<Vec<ShiftResponse>, ServiceError> {
        self.ensure_user(user_id).await?;

        let shifts = self.shift_repository.find_by_user_id(user_id).await?;
        Ok(shifts.into_iter().map(ShiftResponse::from).collect())
    }

    async fn create_shift(&self, input: &CreateShiftRequest) -> Result<ShiftResponse, ServiceError> {
        self.ensure_user(input.user_id).await?;

        let shift = self.shift_repository.create(input).await?;
        info!("✅ Created shift {} for user {}", shift.id, shift.user_id);

        Ok(ShiftResponse::from(shift))
    }

    async fn update_shift(
        &self,
        id: i64,
        input: &UpdateShiftRequest,
    ) -> Result<ShiftResponse, ServiceError> {
        self.shift_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shift", id))?;

        if let Some(user_id) = input.user_id {
            self.ensure_user(user_id).await?;
        }

        let shift = self.shift_repository.update(id, input).await?;
        Ok(ShiftResponse::from(shift))
    }

    async fn delete_shift(&self, id: i64) -> Result<(), ServiceError> {
        self.shift_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shift", id))?;

        self.shift_repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::ShiftRepositoryTrait,
        errors::RepositoryError,
        model::Shift,
        service::order::tests::{StubUserRepo, ts},
    };
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct InMemoryShiftRepo {
        shifts: Mutex<Vec<Shift>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl ShiftRepositoryTrait for InMemoryShiftRepo {
        async fn find_all(&self) -> Result<Vec<Shift>, RepositoryError> {
            Ok(self.shifts.lock().await.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Shift>, RepositoryError> {
            Ok(self.shifts.lock().await.iter().find(|s| s.id == id).cloned())
        }

        async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Shift>, RepositoryError> {
            Ok(self
                .shifts
                .lock()
                .await
                .iter()
                .filter(|s| s.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn create(&self, input: &CreateShiftRequest) -> Result<Shift, RepositoryError> {
            let mut next = self.next_id.lock().await;
            *next += 1;
            let shift = Shift {
                id: *next,
                user_id: input.user_id,
                start_date: input.start_date,
                end_date: input.end_date,
            };
            self.shifts.lock().await.push(shift.clone());
            Ok(shift)
        }

        async fn update(
            &self,
            id: i64,
            input: &UpdateShiftRequest,
        ) -> Result<Shift, RepositoryError> {
            let mut shifts = self.shifts.lock().await;
            let shift = shifts
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(user_id) = input.user_id {
                shift.user_id = user_id;
            }
            if let Some(start) = input.start_date {
                shift.start_date = start;
            }
            if let Some(end) = input.end_date {
                shift.end_date = end;
            }
            Ok(shift.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.shifts.lock().await.retain(|s| s.id != id);
            Ok(())
        }
    }

    fn svc() -> ShiftService {
        ShiftService::new(
            Arc::new(InMemoryShiftRepo::default()),
            Arc::new(StubUserRepo(vec![1, 2])),
        )
    }

    #[tokio::test]
    async fn create_requires_an_existing_user() {
        let svc = svc();

        let err = svc
            .create_shift(&CreateShiftRequest {
                user_id: 9,
                start_date: ts(),
                end_date: ts(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "User not found with id: 9"));

        let shift = svc
            .create_shift(&CreateShiftRequest {
                user_id: 1,
                start_date: ts(),
                end_date: ts(),
            })
            .await
            .unwrap();
        assert_eq!(shift.user_id, 1);
    }

    #[tokio::test]
    async fn partial_update_touches_only_supplied_fields() {
        let svc = svc();
        let shift = svc
            .create_shift(&CreateShiftRequest {
                user_id: 1,
                start_date: ts(),
                end_date: ts(),
            })
            .await
            .unwrap();

        let updated = svc
            .update_shift(
                shift.id,
                &UpdateShiftRequest {
                    user_id: Some(2),
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.user_id, 2);
        assert_eq!(updated.start_date, shift.start_date);
    }

    #[tokio::test]
    async fn my_shifts_filters_by_user() {
        let svc = svc();
        for user_id in [1, 1, 2] {
            svc.create_shift(&CreateShiftRequest {
                user_id,
                start_date: ts(),
                end_date: ts(),
            })
            .await
            .unwrap();
        }

        assert_eq!(svc.get_shifts_by_user(1).await.unwrap().len(), 2);
        assert_eq!(svc.get_shifts_by_user(2).await.unwrap().len(), 1);
    }
}
