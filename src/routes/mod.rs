use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod doc;
pub mod health;
pub mod menu;
pub mod orders;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/menu", menu::router())
        .nest("/orders", orders::route())
        .nest("/recommendations", customers::recommendations_router())
        .nest("/customers", customers::customers_router())
        .nest("/analytics", customers::analytics_router())
}
