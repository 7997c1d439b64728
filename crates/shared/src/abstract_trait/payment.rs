use crate::{
    domain::{
        requests::{CreatePaymentRequest, UpdatePaymentRequest},
        responses::PaymentResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::Payment,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynPaymentRepository = Arc<dyn PaymentRepositoryTrait + Send + Sync>;
pub type DynPaymentService = Arc<dyn PaymentServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Payment>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, RepositoryError>;
    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<Payment>, RepositoryError>;
    async fn find_by_status(&self, status: &str) -> Result<Vec<Payment>, RepositoryError>;
    async fn find_by_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Payment>, RepositoryError>;
    async fn create(
        &self,
        input: &CreatePaymentRequest,
        method: &str,
        status: &str,
    ) -> Result<Payment, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        input: &UpdatePaymentRequest,
        method: &str,
        status: &str,
    ) -> Result<Payment, RepositoryError>;
    async fn update_status(&self, id: i64, status: &str) -> Result<Payment, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait PaymentServiceTrait {
    async fn get_payments(&self) -> Result<Vec<PaymentResponse>, ServiceError>;
    async fn get_payment(&self, id: i64) -> Result<PaymentResponse, ServiceError>;
    async fn get_payments_by_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<PaymentResponse>, ServiceError>;
    async fn get_payments_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<PaymentResponse>, ServiceError>;
    async fn get_payments_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<PaymentResponse>, ServiceError>;
    async fn create_payment(
        &self,
        input: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, ServiceError>;
    async fn update_payment(
        &self,
        id: i64,
        input: &UpdatePaymentRequest,
    ) -> Result<PaymentResponse, ServiceError>;
    async fn update_payment_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<PaymentResponse, ServiceError>;
    async fn delete_payment(&self, id: i64) -> Result<(), ServiceError>;
}
