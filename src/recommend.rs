use std::fmt;

use rand::{Rng, seq::IndexedRandom};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::{MenuStore, OrderLog, PreferenceTracker};

/// Where a suggestion came from, in the order the sources are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    Preference,
    Popularity,
    Random,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Recommendation {
    pub basis: Basis,
    pub item_name: Option<String>,
    pub message: String,
}

impl Recommendation {
    fn suggest(basis: Basis, item_name: &str, message: String) -> Self {
        Self {
            basis,
            item_name: Some(item_name.to_string()),
            message,
        }
    }

    fn unavailable() -> Self {
        Self {
            basis: Basis::Unavailable,
            item_name: None,
            message: "No recommendations available right now.".to_string(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Read-only view over the state a recommendation draws on.
pub struct Recommender<'a> {
    pub menu: &'a MenuStore,
    pub orders: &'a OrderLog,
    pub preferences: &'a PreferenceTracker,
}

impl Recommender<'_> {
    /// Stored preference, then all-time popularity, then any item in stock.
    pub fn recommend<R: Rng + ?Sized>(&self, customer_name: &str, rng: &mut R) -> Recommendation {
        if let Some(preference) = self.preferences.get(customer_name) {
            let matching = self.menu.in_stock_of(preference.preferred_category);
            if let Some(item) = matching.choose(rng) {
                return Recommendation::suggest(
                    Basis::Preference,
                    &item.name,
                    format!("Based on your preferences, try our {}!", item.name),
                );
            }
        }

        if let Some(name) = self.orders.most_popular() {
            return Recommendation::suggest(
                Basis::Popularity,
                name,
                format!("Popular choice: {name}!"),
            );
        }

        if let Some(item) = self.menu.in_stock_items().choose(rng) {
            return Recommendation::suggest(
                Basis::Random,
                &item.name,
                format!("We recommend: {}!", item.name),
            );
        }

        Recommendation::unavailable()
    }
}
