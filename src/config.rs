use std::env;

use anyhow::Context;

use crate::models::Category;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Seed for the recommendation rng; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    /// Category recorded as a customer's preference when the first ordered
    /// item can no longer be found on the menu.
    pub fallback_category: Category,
    /// Order sessions that may be open at once.
    pub max_open_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            rng_seed: None,
            fallback_category: Category::Beverage,
            max_open_sessions: 1000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let rng_seed = match env::var("CAFE_RNG_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("CAFE_RNG_SEED is not a u64: {raw}"))?,
            ),
            Err(_) => None,
        };
        let fallback_category = match env::var("CAFE_FALLBACK_CATEGORY") {
            Ok(raw) => raw
                .parse::<Category>()
                .map_err(|err| anyhow::anyhow!("CAFE_FALLBACK_CATEGORY: {err}"))?,
            Err(_) => Category::Beverage,
        };
        let max_open_sessions = match env::var("CAFE_MAX_OPEN_SESSIONS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .with_context(|| format!("CAFE_MAX_OPEN_SESSIONS is not a positive number: {raw}"))?,
            Err(_) => 1000,
        };
        Ok(Self {
            port,
            host,
            rng_seed,
            fallback_category,
            max_open_sessions,
        })
    }
}
