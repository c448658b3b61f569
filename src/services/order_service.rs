use uuid::Uuid;

use crate::{
    audit::log_audit,
    cafe::Checkout,
    dto::orders::{AddLineRequest, CancelledOrder, OrderList, StartOrderRequest},
    error::AppResult,
    models::SessionState,
    recommend::Recommendation,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    session::OrderSession,
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = pagination.normalize();
    let (items, total) = state.cafe.lock().await.orders(
        usize::try_from(limit).unwrap_or(usize::MAX),
        usize::try_from(offset).unwrap_or(usize::MAX),
    );

    let meta = Meta::new(page, limit, i64::try_from(total).unwrap_or(i64::MAX));
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

pub async fn start_order(
    state: &AppState,
    payload: StartOrderRequest,
) -> AppResult<ApiResponse<OrderSession>> {
    let customer_name = payload.customer_name.unwrap_or_default();
    let session = state.cafe.lock().await.start_order(&customer_name)?;

    tracing::info!(
        session_id = %session.id(),
        customer = %session.customer_name(),
        state = ?session.state(),
        "order session started"
    );

    let message = if session.state() == SessionState::Finished {
        "No items available for order"
    } else {
        "Order started"
    };
    Ok(ApiResponse::success(message, session, Some(Meta::empty())))
}

pub async fn get_session(state: &AppState, id: Uuid) -> AppResult<ApiResponse<OrderSession>> {
    let session = state.cafe.lock().await.session(id)?.clone();
    Ok(ApiResponse::success("OK", session, Some(Meta::empty())))
}

pub async fn add_line(
    state: &AppState,
    id: Uuid,
    payload: AddLineRequest,
) -> AppResult<ApiResponse<OrderSession>> {
    let quantity = payload.quantity.quantity()?;
    let session = state
        .cafe
        .lock()
        .await
        .add_line(id, payload.item_id, quantity)?;

    let message = match session.lines().last() {
        Some(line) => format!(
            "Added {} x {} - Rs {}",
            line.quantity, line.item_name, line.line_total
        ),
        None => "Added".to_string(),
    };
    tracing::debug!(
        session_id = %id,
        item_id = payload.item_id,
        quantity,
        total = session.total(),
        "order line added"
    );

    Ok(ApiResponse::success(message, session, Some(Meta::empty())))
}

pub async fn cancel_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CancelledOrder>> {
    let released = state.cafe.lock().await.cancel_order(id)?;
    let units: i64 = released.iter().map(|line| i64::from(line.quantity)).sum();

    tracing::info!(session_id = %id, lines = released.len(), units, "order session cancelled");
    log_audit(
        "order_cancelled",
        Some("orders"),
        Some(serde_json::json!({ "session_id": id, "units_released": units })),
    );

    Ok(ApiResponse::success(
        "Order cancelled",
        CancelledOrder { released },
        Some(Meta::empty()),
    ))
}

pub async fn session_recommendation(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<Recommendation>> {
    let recommendation = state.cafe.lock().await.recommend_for_session(id)?;
    Ok(ApiResponse::success(
        recommendation.message.clone(),
        recommendation,
        Some(Meta::empty()),
    ))
}

pub async fn finish_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Checkout>> {
    let checkout = state.cafe.lock().await.finish_order(id)?;

    if !checkout.recorded {
        tracing::info!(session_id = %id, "order finished without items");
        return Ok(ApiResponse::success(
            "No order placed",
            checkout,
            Some(Meta::empty()),
        ));
    }

    let order = &checkout.order;
    tracing::info!(
        session_id = %id,
        order_id = %order.id,
        customer = %order.customer_name,
        total = order.total_amount,
        tier = %order.customer_type,
        "order saved"
    );
    log_audit(
        "order_recorded",
        Some("orders"),
        Some(serde_json::json!({
            "order_id": order.id,
            "receipt_number": order.receipt_number,
            "total_amount": order.total_amount,
        })),
    );

    Ok(ApiResponse::success(
        "Thank you for your order!",
        checkout,
        Some(Meta::empty()),
    ))
}
