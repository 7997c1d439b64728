use axum::{Json, response::IntoResponse, routing::get};
use shared::domain::{
    enums::{Allergen, Category, OrderState, PaymentMethod, PaymentStatus, TableState},
    responses::LookupEntryResponse,
};
use utoipa_axum::router::OpenApiRouter;

// Lookup listings are materialized from the static enums, not from tables.

#[utoipa::path(
    get,
    path = "/api/allergens",
    responses((status = 200, description = "All known allergens", body = Vec<LookupEntryResponse>)),
    tag = "Lookup"
)]
pub async fn get_allergens() -> impl IntoResponse {
    Json(LookupEntryResponse::listing::<Allergen>())
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "All menu categories", body = Vec<LookupEntryResponse>)),
    tag = "Lookup"
)]
pub async fn get_categories() -> impl IntoResponse {
    Json(LookupEntryResponse::listing::<Category>())
}

#[utoipa::path(
    get,
    path = "/api/order-states",
    responses((status = 200, description = "All order states", body = Vec<LookupEntryResponse>)),
    tag = "Lookup"
)]
pub async fn get_order_states() -> impl IntoResponse {
    Json(LookupEntryResponse::listing::<OrderState>())
}

#[utoipa::path(
    get,
    path = "/api/table-states",
    responses((status = 200, description = "All table states", body = Vec<LookupEntryResponse>)),
    tag = "Lookup"
)]
pub async fn get_table_states() -> impl IntoResponse {
    Json(LookupEntryResponse::listing::<TableState>())
}

#[utoipa::path(
    get,
    path = "/api/payment-methods",
    responses((status = 200, description = "All payment methods", body = Vec<LookupEntryResponse>)),
    tag = "Lookup"
)]
pub async fn get_payment_methods() -> impl IntoResponse {
    Json(LookupEntryResponse::listing::<PaymentMethod>())
}

#[utoipa::path(
    get,
    path = "/api/payment-statuses",
    responses((status = 200, description = "All payment statuses", body = Vec<LookupEntryResponse>)),
    tag = "Lookup"
)]
pub async fn get_payment_statuses() -> impl IntoResponse {
    Json(LookupEntryResponse::listing::<PaymentStatus>())
}

pub fn lookup_routes() -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/allergens", get(get_allergens))
        .route("/api/categories", get(get_categories))
        .route("/api/order-states", get(get_order_states))
        .route("/api/table-states", get(get_table_states))
        .route("/api/payment-methods", get(get_payment_methods))
        .route("/api/payment-statuses", get(get_payment_statuses))
}
