use crate::{
    abstract_trait::PaymentRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreatePaymentRequest, UpdatePaymentRequest},
    errors::RepositoryError,
    model::Payment,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::info;

const PAYMENT_COLUMNS: &str = "id, amount, payment_method, payment_status, order_id, created_at";

pub struct PaymentRepository {
    db: ConnectionPool,
}

impl PaymentRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepositoryTrait for PaymentRepository {
    async fn find_all(&self) -> Result<Vec<Payment>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments ORDER BY id"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payments)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payment = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payment)
    }

    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<Payment>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE order_id = $1 ORDER BY id"
        ))
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payments)
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Payment>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE payment_status = $1 ORDER BY id"
        ))
        .bind(status)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payments)
    }

    async fn find_by_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Payment>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE created_at BETWEEN $1 AND $2 ORDER BY id"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payments)
    }

    async fn create(
        &self,
        input: &CreatePaymentRequest,
        method: &str,
        status: &str,
    ) -> Result<Payment, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payment = sqlx::query_as::<_, Payment>(&format!(
            r#"
            INSERT INTO payments (amount, payment_method, payment_status, order_id, created_at)
            VALUES ($1, $2, $3, $4, current_timestamp)
            RETURNING {PAYMENT_COLUMNS}
            "#
        ))
        .bind(input.amount)
        .bind(method)
        .bind(status)
        .bind(input.order_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        info!(
            "✅ Recorded payment {} for order {}",
            payment.id, payment.order_id
        );
        Ok(payment)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdatePaymentRequest,
        method: &str,
        status: &str,
    ) -> Result<Payment, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payment = sqlx::query_as::<_, Payment>(&format!(
            r#"
            UPDATE payments
            SET amount = COALESCE($2, amount),
                payment_method = $3,
                payment_status = $4
            WHERE id = $1
            RETURNING {PAYMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(input.amount)
        .bind(method)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payment)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Payment, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let payment = sqlx::query_as::<_, Payment>(&format!(
            r#"
            UPDATE payments
            SET payment_status = $2
            WHERE id = $1
            RETURNING {PAYMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(payment)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
