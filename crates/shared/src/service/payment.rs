use crate::{
    abstract_trait::{DynOrderQueryRepository, DynPaymentRepository, PaymentServiceTrait},
    domain::{
        enums::{LookupEnum, PaymentMethod, PaymentStatus},
        requests::{CreatePaymentRequest, UpdatePaymentRequest},
        responses::PaymentResponse,
    },
    errors::ServiceError,
    utils::parse_datetime,
};
use async_trait::async_trait;

pub struct PaymentService {
    payment_repository: DynPaymentRepository,
    order_repository: DynOrderQueryRepository,
}

impl PaymentService {
    pub fn new(
        payment_repository: DynPaymentRepository,
        order_repository: DynOrderQueryRepository,
    ) -> Self {
        Self {
            payment_repository,
            order_repository,
        }
    }

    async fn ensure_payment(&self, id: i64) -> Result<(), ServiceError> {
        self.payment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Payment", id))?;
        Ok(())
    }
}

#[async_trait]
impl PaymentServiceTrait for PaymentService {
    async fn get_payments(&self) -> Result<Vec<PaymentResponse>, ServiceError> {
        let payments = self.payment_repository.find_all().await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    async fn get_payment(&self, id: i64) -> Result<PaymentResponse, ServiceError> {
        let payment = self
            .payment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Payment", id))?;

        Ok(PaymentResponse::from(payment))
    }

    async fn get_payments_by_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<PaymentResponse>, ServiceError> {
        self.order_repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;

        let payments = self.payment_repository.find_by_order_id(order_id).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    async fn get_payments_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<PaymentResponse>, ServiceError> {
        let status = PaymentStatus::parse(status)?;
        let payments = self.payment_repository.find_by_status(status.as_str()).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    async fn get_payments_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<PaymentResponse>, ServiceError> {
        let start = parse_datetime(start_date)?;
        let end = parse_datetime(end_date)?;

        let payments = self
            .payment_repository
            .find_by_created_between(start, end)
            .await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    async fn create_payment(
        &self,
        input: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, ServiceError> {
        let method = PaymentMethod::parse(&input.payment_method)?;
        let status = PaymentStatus::parse(&input.payment_status)?;

        self.order_repository
            .find_by_id(input.order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", input.order_id))?;

        let payment = self
            .payment_repository
            .create(input, method.as_str(), status.as_str())
            .await?;

        Ok(PaymentResponse::from(payment))
    }

    async fn update_payment(
        &self,
        id: i64,
        input: &UpdatePaymentRequest,
    ) -> Result<PaymentResponse, ServiceError> {
        self.ensure_payment(id).await?;

        let method = PaymentMethod::parse(&input.payment_method)?;
        let status = PaymentStatus::parse(&input.payment_status)?;

        let payment = self
            .payment_repository
            .update(id, input, method.as_str(), status.as_str())
            .await?;

        Ok(PaymentResponse::from(payment))
    }

    async fn update_payment_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<PaymentResponse, ServiceError> {
        self.ensure_payment(id).await?;

        let status = PaymentStatus::parse(status)?;
        let payment = self
            .payment_repository
            .update_status(id, status.as_str())
            .await?;

        Ok(PaymentResponse::from(payment))
    }

    async fn delete_payment(&self, id: i64) -> Result<(), ServiceError> {
        self.ensure_payment(id).await?;
        self.payment_repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::PaymentRepositoryTrait,
        errors::RepositoryError,
        model::{Order, Payment},
        service::order::tests::{OrderStore, StoreQueryRepo, ts},
    };
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPaymentRepo {
        payments: Mutex<Vec<Payment>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl PaymentRepositoryTrait for InMemoryPaymentRepo {
        async fn find_all(&self) -> Result<Vec<Payment>, RepositoryError> {
            Ok(self.payments.lock().await.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, RepositoryError> {
            Ok(self.payments.lock().await.iter().find(|p| p.id == id).cloned())
        }

        async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<Payment>, RepositoryError> {
            Ok(self
                .payments
                .lock()
                .await
                .iter()
                .filter(|p| p.order_id == order_id)
                .cloned()
                .collect())
        }

        async fn find_by_status(&self, status: &str) -> Result<Vec<Payment>, RepositoryError> {
            Ok(self
                .payments
                .lock()
                .await
                .iter()
                .filter(|p| p.payment_status == status)
                .cloned()
                .collect())
        }

        async fn find_by_created_between(
            &self,
            start: NaiveDateTime,
            end: NaiveDateTime,
        ) -> Result<Vec<Payment>, RepositoryError> {
            Ok(self
                .payments
                .lock()
                .await
                .iter()
                .filter(|p| p.created_at >= start && p.created_at <= end)
                .cloned()
                .collect())
        }

        async fn create(
            &self,
            input: &CreatePaymentRequest,
            method: &str,
            status: &str,
        ) -> Result<Payment, RepositoryError> {
            let mut next = self.next_id.lock().await;
            *next += 1;
            let payment = Payment {
                id: *next,
                amount: input.amount,
                payment_method: method.to_string(),
                payment_status: status.to_string(),
                order_id: input.order_id,
                created_at: ts(),
            };
            self.payments.lock().await.push(payment.clone());
            Ok(payment)
        }

        async fn update(
            &self,
            id: i64,
            input: &UpdatePaymentRequest,
            method: &str,
            status: &str,
        ) -> Result<Payment, RepositoryError> {
            let mut payments = self.payments.lock().await;
            let p = payments
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            p.amount = input.amount;
            p.payment_method = method.to_string();
            p.payment_status = status.to_string();
            Ok(p.clone())
        }

        async fn update_status(&self, id: i64, status: &str) -> Result<Payment, RepositoryError> {
            let mut payments = self.payments.lock().await;
            let p = payments
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            p.payment_status = status.to_string();
            Ok(p.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.payments.lock().await.retain(|p| p.id != id);
            Ok(())
        }
    }

    async fn svc() -> PaymentService {
        let store = OrderStore::new();
        store.orders.lock().await.push(Order {
            id: 1,
            table_id: 1,
            user_id: 1,
            order_state: "SERVED".into(),
            total_amount: Decimal::new(1900, 2),
            customer_count: 2,
            created_at: ts(),
            updated_at: ts(),
        });

        PaymentService::new(
            Arc::new(InMemoryPaymentRepo::default()),
            Arc::new(StoreQueryRepo(store)),
        )
    }

    fn create_req(method: &str, status: &str, order_id: i64) -> CreatePaymentRequest {
        CreatePaymentRequest {
            amount: Decimal::new(1900, 2),
            payment_method: method.into(),
            payment_status: status.into(),
            order_id,
        }
    }

    #[tokio::test]
    async fn create_coerces_method_and_status() {
        let svc = svc().await;

        let payment = svc
            .create_payment(&create_req("credit_card", "pending", 1))
            .await
            .unwrap();

        assert_eq!(payment.payment_method, "CREDIT_CARD");
        assert_eq!(payment.payment_status, "PENDING");
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let svc = svc().await;

        let err = svc
            .create_payment(&create_req("BARTER", "PENDING", 1))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Invalid payment method: BARTER")
        );
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let svc = svc().await;

        let err = svc
            .create_payment(&create_req("CASH", "PENDING", 42))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Order not found with id: 42"));
    }

    #[tokio::test]
    async fn status_patch_coerces_case_insensitively() {
        let svc = svc().await;
        let payment = svc.create_payment(&create_req("CASH", "PENDING", 1)).await.unwrap();

        let updated = svc
            .update_payment_status(payment.id, "completed")
            .await
            .unwrap();
        assert_eq!(updated.payment_status, "COMPLETED");

        let err = svc
            .update_payment_status(payment.id, "settled")
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Invalid payment status: settled")
        );
    }
}
