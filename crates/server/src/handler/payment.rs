use crate::middleware::{jwt, role, validate::ValidatedJson};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use shared::{
    abstract_trait::DynPaymentService,
    domain::{
        requests::{CreatePaymentRequest, DateRangeQuery, StatusQuery, UpdatePaymentRequest},
        responses::PaymentResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/payments",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "List of payments", body = Vec<PaymentResponse>)),
    tag = "Payment"
)]
pub async fn get_payments(
    Extension(service): Extension<DynPaymentService>,
) -> Result<impl IntoResponse, HttpError> {
    let payments = service.get_payments().await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/admin/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment detail", body = PaymentResponse),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payment"
)]
pub async fn get_payment(
    Extension(service): Extension<DynPaymentService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let payment = service.get_payment(id).await?;
    Ok(Json(payment))
}

#[utoipa::path(
    get,
    path = "/api/admin/payments/order/{orderId}",
    security(("bearer_auth" = [])),
    params(("orderId" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Payments of the order", body = Vec<PaymentResponse>),
        (status = 404, description = "Order not found")
    ),
    tag = "Payment"
)]
pub async fn get_payments_by_order(
    Extension(service): Extension<DynPaymentService>,
    Path(order_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let payments = service.get_payments_by_order(order_id).await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/admin/payments/status/{status}",
    security(("bearer_auth" = [])),
    params(("status" = String, Path, description = "Payment status, case-insensitive")),
    responses(
        (status = 200, description = "Payments in the status", body = Vec<PaymentResponse>),
        (status = 400, description = "Unknown payment status")
    ),
    tag = "Payment"
)]
pub async fn get_payments_by_status(
    Extension(service): Extension<DynPaymentService>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let payments = service.get_payments_by_status(&status).await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/admin/payments/date-range",
    security(("bearer_auth" = [])),
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Payments created inside the range", body = Vec<PaymentResponse>),
        (status = 400, description = "Malformed date")
    ),
    tag = "Payment"
)]
pub async fn get_payments_by_date_range(
    Extension(service): Extension<DynPaymentService>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let payments = service
        .get_payments_by_date_range(&range.start_date, &range.end_date)
        .await?;
    Ok(Json(payments))
}

#[utoipa::path(
    delete,
    path = "/api/admin/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Payment id")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payment"
)]
pub async fn delete_payment(
    Extension(service): Extension<DynPaymentService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_payment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/cashier/payments",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentResponse),
        (status = 400, description = "Unknown method or status"),
        (status = 404, description = "Order not found")
    ),
    tag = "Payment"
)]
pub async fn create_payment(
    Extension(service): Extension<DynPaymentService>,
    ValidatedJson(body): ValidatedJson<CreatePaymentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let payment = service.create_payment(&body).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    put,
    path = "/api/cashier/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Payment id")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = PaymentResponse),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payment"
)]
pub async fn update_payment(
    Extension(service): Extension<DynPaymentService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdatePaymentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let payment = service.update_payment(id, &body).await?;
    Ok(Json(payment))
}

#[utoipa::path(
    patch,
    path = "/api/cashier/payments/{id}/status",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Payment id"), StatusQuery),
    responses(
        (status = 200, description = "Status updated", body = PaymentResponse),
        (status = 400, description = "Unknown payment status")
    ),
    tag = "Payment"
)]
pub async fn update_payment_status(
    Extension(service): Extension<DynPaymentService>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let payment = service.update_payment_status(id, &query.status).await?;
    Ok(Json(payment))
}

#[utoipa::path(
    get,
    path = "/api/cashier/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment detail", body = PaymentResponse),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payment"
)]
pub async fn cashier_get_payment(
    Extension(service): Extension<DynPaymentService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let payment = service.get_payment(id).await?;
    Ok(Json(payment))
}

#[utoipa::path(
    get,
    path = "/api/cashier/payments/status/{status}",
    security(("bearer_auth" = [])),
    params(("status" = String, Path, description = "Payment status, case-insensitive")),
    responses(
        (status = 200, description = "Payments in the status", body = Vec<PaymentResponse>),
        (status = 400, description = "Unknown payment status")
    ),
    tag = "Payment"
)]
pub async fn cashier_get_payments_by_status(
    Extension(service): Extension<DynPaymentService>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let payments = service.get_payments_by_status(&status).await?;
    Ok(Json(payments))
}

pub fn payment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin = OpenApiRouter::new()
        .route("/api/admin/payments", get(get_payments))
        .route("/api/admin/payments/date-range", get(get_payments_by_date_range))
        .route("/api/admin/payments/order/{orderId}", get(get_payments_by_order))
        .route("/api/admin/payments/status/{status}", get(get_payments_by_status))
        .route("/api/admin/payments/{id}", get(get_payment))
        .route("/api/admin/payments/{id}", delete(delete_payment))
        .route_layer(middleware::from_fn(role::admin_only))
        .route_layer(middleware::from_fn(jwt::auth));

    let cashier = OpenApiRouter::new()
        .route("/api/cashier/payments", post(create_payment))
        .route("/api/cashier/payments/{id}", put(update_payment))
        .route("/api/cashier/payments/{id}", get(cashier_get_payment))
        .route("/api/cashier/payments/{id}/status", patch(update_payment_status))
        .route(
            "/api/cashier/payments/status/{status}",
            get(cashier_get_payments_by_status),
        )
        .route_layer(middleware::from_fn(role::cashier_only))
        .route_layer(middleware::from_fn(jwt::auth));

    admin
        .merge(cashier)
        .layer(Extension(app_state.di_container.payment_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
