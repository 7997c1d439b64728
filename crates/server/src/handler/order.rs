use crate::middleware::{jwt, validate::ValidatedJson};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use shared::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{CreateOrderRequest, DateRangeQuery, StateQuery, UpdateOrderRequest},
        responses::OrderResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "List of orders", body = Vec<OrderResponse>)),
    tag = "Order"
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.get_orders().await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with its items", body = OrderResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.get_order(id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/orders/table/{tableId}",
    security(("bearer_auth" = [])),
    params(("tableId" = i64, Path, description = "Table id")),
    responses((status = 200, description = "Orders placed at the table", body = Vec<OrderResponse>)),
    tag = "Order"
)]
pub async fn get_orders_by_table(
    Extension(service): Extension<DynOrderService>,
    Path(table_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.get_orders_by_table(table_id).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{userId}",
    security(("bearer_auth" = [])),
    params(("userId" = i64, Path, description = "User id")),
    responses((status = 200, description = "Orders taken by the user", body = Vec<OrderResponse>)),
    tag = "Order"
)]
pub async fn get_orders_by_user(
    Extension(service): Extension<DynOrderService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.get_orders_by_user(user_id).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/date-range",
    security(("bearer_auth" = [])),
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Orders created inside the range", body = Vec<OrderResponse>),
        (status = 400, description = "Malformed date")
    ),
    tag = "Order"
)]
pub async fn get_orders_by_date_range(
    Extension(service): Extension<DynOrderService>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service
        .get_orders_by_date_range(&range.start_date, &range.end_date)
        .await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created with recomputed total", body = OrderResponse),
        (status = 400, description = "Unknown order state"),
        (status = 404, description = "Table or user not found")
    ),
    tag = "Order"
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderService>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.update_order(id, &body).await?;
    Ok(Json(order))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/state",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order id"), StateQuery),
    responses(
        (status = 200, description = "State updated", body = OrderResponse),
        (status = 400, description = "Unknown order state")
    ),
    tag = "Order"
)]
pub async fn update_order_state(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i64>,
    Query(query): Query<StateQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.update_order_state(id, &query.state).await?;
    Ok(Json(order))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/calculate-total",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Total recomputed from items"),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn calculate_order_total(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.recalculate_total(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order and its items deleted"),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders", post(create_order))
        .route("/api/orders/date-range", get(get_orders_by_date_range))
        .route("/api/orders/table/{tableId}", get(get_orders_by_table))
        .route("/api/orders/user/{userId}", get(get_orders_by_user))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .route("/api/orders/{id}/state", patch(update_order_state))
        .route("/api/orders/{id}/calculate-total", patch(calculate_order_total))
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use shared::{
        abstract_trait::OrderServiceTrait,
        errors::ServiceError,
        model::Order,
    };
    use std::sync::Arc;

    struct RecalcOnlyService;

    #[async_trait]
    impl OrderServiceTrait for RecalcOnlyService {
        async fn get_orders(&self) -> Result<Vec<OrderResponse>, ServiceError> {
            unimplemented!()
        }

        async fn get_order(&self, _id: i64) -> Result<OrderResponse, ServiceError> {
            unimplemented!()
        }

        async fn get_orders_by_table(
            &self,
            _table_id: i64,
        ) -> Result<Vec<OrderResponse>, ServiceError> {
            unimplemented!()
        }

        async fn get_orders_by_user(
            &self,
            _user_id: i64,
        ) -> Result<Vec<OrderResponse>, ServiceError> {
            unimplemented!()
        }

        async fn get_orders_by_date_range(
            &self,
            _start_date: &str,
            _end_date: &str,
        ) -> Result<Vec<OrderResponse>, ServiceError> {
            unimplemented!()
        }

        async fn create_order(
            &self,
            _input: &CreateOrderRequest,
        ) -> Result<OrderResponse, ServiceError> {
            unimplemented!()
        }

        async fn update_order(
            &self,
            _id: i64,
            _input: &UpdateOrderRequest,
        ) -> Result<OrderResponse, ServiceError> {
            unimplemented!()
        }

        async fn update_order_state(
            &self,
            _id: i64,
            _state: &str,
        ) -> Result<OrderResponse, ServiceError> {
            unimplemented!()
        }

        async fn recalculate_total(&self, id: i64) -> Result<OrderResponse, ServiceError> {
            let order = Order {
                id,
                table_id: 1,
                user_id: 1,
                order_state: "PENDING".into(),
                total_amount: Decimal::new(1900, 2),
                customer_count: 2,
                created_at: NaiveDate::from_ymd_opt(2026, 1, 5)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
                updated_at: NaiveDate::from_ymd_opt(2026, 1, 5)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            };
            Ok(OrderResponse::from_model(order, vec![]))
        }

        async fn delete_order(&self, _id: i64) -> Result<(), ServiceError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn recalculation_answers_ok_with_empty_body() {
        let service: shared::abstract_trait::DynOrderService = Arc::new(RecalcOnlyService);

        let response = calculate_order_total(Extension(service), Path(7))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
    }
}
