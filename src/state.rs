use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cafe::Cafe;

/// Every request locks the whole cafe, so a stock check and its decrement
/// (or an order append) never interleave with another request.
#[derive(Clone)]
pub struct AppState {
    pub cafe: Arc<Mutex<Cafe>>,
}

impl AppState {
    pub fn new(cafe: Cafe) -> Self {
        Self {
            cafe: Arc::new(Mutex::new(cafe)),
        }
    }
}
