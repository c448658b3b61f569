use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    cafe::Checkout,
    dto::orders::{AddLineRequest, CancelledOrder, OrderList, StartOrderRequest},
    error::AppResult,
    recommend::Recommendation,
    response::ApiResponse,
    routes::params::Pagination,
    services::order_service,
    session::OrderSession,
    state::AppState,
};

pub fn route() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/sessions", post(start_order))
        .route("/sessions/{id}", get(get_session).delete(cancel_order))
        .route("/sessions/{id}/lines", post(add_line))
        .route("/sessions/{id}/recommendation", get(session_recommendation))
        .route("/sessions/{id}/finish", post(finish_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(Pagination),
    responses(
        (status = 200, description = "Recorded orders, newest first", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/sessions",
    request_body = StartOrderRequest,
    responses(
        (status = 201, description = "Order session opened", body = ApiResponse<OrderSession>),
        (status = 503, description = "Open session limit reached"),
    ),
    tag = "Orders"
)]
pub async fn start_order(
    State(state): State<AppState>,
    Json(payload): Json<StartOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderSession>>)> {
    let resp = order_service::start_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/orders/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Order session ID")
    ),
    responses(
        (status = 200, description = "Session with its lines and running total", body = ApiResponse<OrderSession>),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Orders"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderSession>>> {
    let resp = order_service::get_session(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Order session ID")
    ),
    responses(
        (status = 200, description = "Session dropped and its stock returned", body = ApiResponse<CancelledOrder>),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CancelledOrder>>> {
    let resp = order_service::cancel_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/sessions/{id}/lines",
    params(
        ("id" = Uuid, Path, description = "Order session ID")
    ),
    request_body = AddLineRequest,
    responses(
        (status = 200, description = "Line added and stock taken", body = ApiResponse<OrderSession>),
        (status = 400, description = "Quantity is not a positive number"),
        (status = 404, description = "Unknown session or menu item"),
        (status = 409, description = "Not enough stock, or session finished"),
    ),
    tag = "Orders"
)]
pub async fn add_line(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddLineRequest>,
) -> AppResult<Json<ApiResponse<OrderSession>>> {
    let resp = order_service::add_line(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/sessions/{id}/recommendation",
    params(
        ("id" = Uuid, Path, description = "Order session ID")
    ),
    responses(
        (status = 200, description = "Suggestion for the session's customer", body = ApiResponse<Recommendation>),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Orders"
)]
pub async fn session_recommendation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Recommendation>>> {
    let resp = order_service::session_recommendation(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/sessions/{id}/finish",
    params(
        ("id" = Uuid, Path, description = "Order session ID")
    ),
    responses(
        (status = 200, description = "Bill for the finished order", body = ApiResponse<Checkout>),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Orders"
)]
pub async fn finish_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Checkout>>> {
    let resp = order_service::finish_order(&state, id).await?;
    Ok(Json(resp))
}
