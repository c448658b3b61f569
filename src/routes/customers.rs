use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Analytics, CustomerPreference},
    recommend::Recommendation,
    response::ApiResponse,
    services::{analytics_service, recommendation_service},
    state::AppState,
};

pub fn recommendations_router() -> Router<AppState> {
    Router::new().route("/{customer}", get(recommend))
}

pub fn customers_router() -> Router<AppState> {
    Router::new().route("/{customer}/preference", get(customer_preference))
}

pub fn analytics_router() -> Router<AppState> {
    Router::new().route("/", get(analytics))
}

#[utoipa::path(
    get,
    path = "/api/recommendations/{customer}",
    params(
        ("customer" = String, Path, description = "Customer name")
    ),
    responses(
        (status = 200, description = "Preference, popularity or random suggestion", body = ApiResponse<Recommendation>),
        (status = 422, description = "Blank customer name"),
    ),
    tag = "Customers"
)]
pub async fn recommend(
    State(state): State<AppState>,
    Path(customer): Path<String>,
) -> AppResult<Json<ApiResponse<Recommendation>>> {
    let resp = recommendation_service::recommend(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{customer}/preference",
    params(
        ("customer" = String, Path, description = "Customer name")
    ),
    responses(
        (status = 200, description = "Stored preference", body = ApiResponse<CustomerPreference>),
        (status = 404, description = "No order recorded for this customer"),
    ),
    tag = "Customers"
)]
pub async fn customer_preference(
    State(state): State<AppState>,
    Path(customer): Path<String>,
) -> AppResult<Json<ApiResponse<CustomerPreference>>> {
    let resp = analytics_service::customer_preference(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Order count, revenue, customers and average order value", body = ApiResponse<Analytics>)
    ),
    tag = "Analytics"
)]
pub async fn analytics(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Analytics>>> {
    let resp = analytics_service::analytics(&state).await?;
    Ok(Json(resp))
}
