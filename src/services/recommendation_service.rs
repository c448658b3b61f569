use crate::{
    error::AppResult,
    recommend::Recommendation,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn recommend(
    state: &AppState,
    customer_name: &str,
) -> AppResult<ApiResponse<Recommendation>> {
    let recommendation = state.cafe.lock().await.recommend(customer_name)?;
    tracing::debug!(
        customer = %customer_name,
        basis = ?recommendation.basis,
        "recommendation served"
    );
    Ok(ApiResponse::success(
        format!("Recommendation for {}", customer_name.trim()),
        recommendation,
        Some(Meta::empty()),
    ))
}
