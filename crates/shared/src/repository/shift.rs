use crate::{
    abstract_trait::ShiftRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateShiftRequest, UpdateShiftRequest},
    errors::RepositoryError,
    model::Shift,
};
use async_trait::async_trait;

pub struct ShiftRepository {
    db: ConnectionPool,
}

impl ShiftRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShiftRepositoryTrait for ShiftRepository {
    async fn find_all(&self) -> Result<Vec<Shift>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let shifts = sqlx::query_as::<_, Shift>(
            "SELECT id, user_id, start_date, end_date FROM shifts ORDER BY start_date",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(shifts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Shift>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let shift = sqlx::query_as::<_, Shift>(
            "SELECT id, user_id, start_date, end_date FROM shifts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(shift)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Shift>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let shifts = sqlx::query_as::<_, Shift>(
            r#"
            SELECT id, user_id, start_date, end_date
            FROM shifts
            WHERE user_id = $1
            ORDER BY start_date
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(shifts)
    }

    async fn create(&self, input: &CreateShiftRequest) -> Result<Shift, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let shift = sqlx::query_as::<_, Shift>(
            r#"
            INSERT INTO shifts (user_id, start_date, end_date)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, start_date, end_date
            "#,
        )
        .bind(input.user_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(shift)
    }

    async fn update(&self, id: i64, input: &UpdateShiftRequest) -> Result<Shift, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let shift = sqlx::query_as::<_, Shift>(
            r#"
            UPDATE shifts
            SET user_id = COALESCE($2, user_id),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date)
            WHERE id = $1
            RETURNING id, user_id, start_date, end_date
            "#,
        )
        .bind(id)
        .bind(input.user_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(shift)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM shifts WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
