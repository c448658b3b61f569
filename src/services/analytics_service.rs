use crate::{
    error::AppResult,
    models::{Analytics, CustomerPreference},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn analytics(state: &AppState) -> AppResult<ApiResponse<Analytics>> {
    let analytics = state.cafe.lock().await.analytics();
    Ok(ApiResponse::success(
        "Business analytics",
        analytics,
        Some(Meta::empty()),
    ))
}

pub async fn customer_preference(
    state: &AppState,
    customer_name: &str,
) -> AppResult<ApiResponse<CustomerPreference>> {
    let preference = state.cafe.lock().await.preference(customer_name)?;
    Ok(ApiResponse::success(
        "Customer preference",
        preference,
        Some(Meta::empty()),
    ))
}
