use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    classify::classify_customer,
    config::AppConfig,
    error::{AppError, AppResult},
    models::{
        Analytics, Category, CustomerPreference, ItemId, MenuItem, Order, OrderLine, ShutdownReport,
    },
    recommend::{Recommendation, Recommender},
    session::OrderSession,
    store::{FieldUpdate, MenuStore, OrderLog, PreferenceTracker},
};

/// Result of finishing a session. Empty orders come back with
/// `recorded == false` and no recommendation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Checkout {
    pub order: Order,
    pub recorded: bool,
    pub recommendation: Option<Recommendation>,
}

/// All cafe state: menu, order history, preferences and open sessions.
pub struct Cafe {
    menu: MenuStore,
    orders: OrderLog,
    preferences: PreferenceTracker,
    sessions: HashMap<Uuid, OrderSession>,
    rng: StdRng,
    fallback_category: Category,
    max_open_sessions: usize,
}

impl Cafe {
    /// A cafe opening with the seed menu.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_menu(MenuStore::seeded(), config)
    }

    pub fn with_menu(menu: MenuStore, config: &AppConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            menu,
            orders: OrderLog::new(),
            preferences: PreferenceTracker::new(),
            sessions: HashMap::new(),
            rng,
            fallback_category: config.fallback_category,
            max_open_sessions: config.max_open_sessions,
        }
    }

    pub fn order_log(&self) -> &OrderLog {
        &self.orders
    }

    pub fn add_menu_item(
        &mut self,
        name: &str,
        price: i64,
        category: &str,
        stock: i64,
    ) -> AppResult<MenuItem> {
        self.menu.add(name, price, category, stock)
    }

    pub fn list_menu(&self, include_out_of_stock: bool) -> Vec<MenuItem> {
        self.menu.list(include_out_of_stock)
    }

    pub fn menu_item(&self, id: ItemId) -> AppResult<MenuItem> {
        self.menu.find(id).cloned()
    }

    pub fn update_menu_item(&mut self, id: ItemId, field: &str, value: &str) -> AppResult<MenuItem> {
        // An unknown id wins over a bad field or value.
        self.menu.find(id)?;
        let update = FieldUpdate::parse(field, value)?;
        self.menu.update(id, update)
    }

    /// Returns the removed item, or `None` when the deletion was not confirmed.
    pub fn delete_menu_item(&mut self, id: ItemId, confirmed: bool) -> AppResult<Option<MenuItem>> {
        self.menu.delete(id, confirmed)
    }

    /// Opens a session, as long as fewer than `max_open_sessions` are open.
    pub fn start_order(&mut self, customer_name: &str) -> AppResult<OrderSession> {
        if self.sessions.len() >= self.max_open_sessions {
            return Err(AppError::TooManySessions(self.max_open_sessions));
        }
        let session = OrderSession::start(customer_name, &self.menu);
        self.sessions.insert(session.id(), session.clone());
        Ok(session)
    }

    /// Abandons an open session and returns its reserved stock to the menu.
    pub fn cancel_order(&mut self, session_id: Uuid) -> AppResult<Vec<OrderLine>> {
        let session = self
            .sessions
            .remove(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("order session {session_id}")))?;
        Ok(session.cancel(&mut self.menu))
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn session(&self, session_id: Uuid) -> AppResult<&OrderSession> {
        self.sessions
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("order session {session_id}")))
    }

    pub fn add_line(
        &mut self,
        session_id: Uuid,
        item_id: ItemId,
        quantity: i64,
    ) -> AppResult<OrderSession> {
        let session = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("order session {session_id}")))?;
        session.add_line(&mut self.menu, item_id, quantity)?;
        Ok(session.clone())
    }

    /// Recommendation for the customer of an open session; the session is
    /// left as it is.
    pub fn recommend_for_session(&mut self, session_id: Uuid) -> AppResult<Recommendation> {
        let customer_name = self.session(session_id)?.customer_name().to_string();
        Ok(self.suggest(&customer_name))
    }

    /// Closes the session, bills it and records it when it has lines.
    pub fn finish_order(&mut self, session_id: Uuid) -> AppResult<Checkout> {
        let session = self
            .sessions
            .remove(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("order session {session_id}")))?;
        let draft = session.finish();

        // The tier and the stored preference both count this order once.
        let order_count = count_u32(self.orders.orders_for(&draft.customer_name) + 1);
        let total_amount: i64 = draft.lines.iter().map(|line| line.line_total).sum();
        debug_assert_eq!(total_amount, draft.total_amount);

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let order = Order {
            id,
            receipt_number: build_receipt_number(id, created_at),
            customer_name: draft.customer_name,
            created_at,
            lines: draft.lines,
            total_amount,
            customer_type: classify_customer(total_amount, order_count),
        };

        if order.is_empty() {
            return Ok(Checkout {
                order,
                recorded: false,
                recommendation: None,
            });
        }

        self.orders.record(order.clone());
        let preferred_category = order
            .lines
            .first()
            .and_then(|line| self.menu.category_of(line.item_id))
            .unwrap_or(self.fallback_category);
        self.preferences
            .upsert(&order, preferred_category, order_count);

        let recommendation = self.suggest(&order.customer_name);
        Ok(Checkout {
            order,
            recorded: true,
            recommendation: Some(recommendation),
        })
    }

    pub fn recommend(&mut self, customer_name: &str) -> AppResult<Recommendation> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(AppError::Validation("customer name cannot be empty".into()));
        }
        Ok(self.suggest(customer_name))
    }

    fn suggest(&mut self, customer_name: &str) -> Recommendation {
        let recommender = Recommender {
            menu: &self.menu,
            orders: &self.orders,
            preferences: &self.preferences,
        };
        recommender.recommend(customer_name, &mut self.rng)
    }

    pub fn preference(&self, customer_name: &str) -> AppResult<CustomerPreference> {
        self.preferences
            .get(customer_name.trim())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("preference for {customer_name}")))
    }

    /// Recorded orders, newest first, with the total count.
    pub fn orders(&self, limit: usize, offset: usize) -> (Vec<Order>, usize) {
        (self.orders.page(limit, offset), self.orders.len())
    }

    pub fn analytics(&self) -> Analytics {
        let total_orders = self.orders.len();
        let total_revenue = self.orders.total_revenue();
        let average_order_value =
            (total_orders > 0).then(|| total_revenue as f64 / total_orders as f64);
        Analytics {
            total_orders,
            total_revenue,
            unique_customers: self.preferences.customer_count(),
            average_order_value,
        }
    }

    pub fn shutdown_report(&self) -> ShutdownReport {
        ShutdownReport {
            total_orders: self.orders.len(),
            total_revenue: self.orders.total_revenue(),
        }
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn build_receipt_number(order_id: Uuid, created_at: DateTime<Utc>) -> String {
    let date = created_at.format("%Y%m%d");
    let suffix = order_id.simple().to_string();
    format!("RCPT-{}-{}", date, &suffix[..8])
}
