use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ItemId, OrderLine, SessionState},
    store::MenuStore,
};

pub const GUEST_NAME: &str = "Guest";

/// One checkout in progress. Stock is taken per line as lines are added.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderSession {
    id: Uuid,
    customer_name: String,
    state: SessionState,
    lines: Vec<OrderLine>,
    total: i64,
}

/// What a finished session hands over to billing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total_amount: i64,
}

impl OrderSession {
    /// A blank name is taken as [`GUEST_NAME`]. With nothing in stock the
    /// session starts out finished.
    pub fn start(customer_name: &str, menu: &MenuStore) -> Self {
        let name = customer_name.trim();
        let customer_name = if name.is_empty() {
            GUEST_NAME.to_string()
        } else {
            name.to_string()
        };
        let state = if menu.any_in_stock() {
            SessionState::Selecting
        } else {
            SessionState::Finished
        };
        Self {
            id: Uuid::new_v4(),
            customer_name,
            state,
            lines: Vec::new(),
            total: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Reserves `quantity` of `item_id` and appends the line. A failed
    /// reservation leaves both the menu and the session untouched.
    pub fn add_line(
        &mut self,
        menu: &mut MenuStore,
        item_id: ItemId,
        quantity: i64,
    ) -> AppResult<&OrderLine> {
        if self.state == SessionState::Finished {
            return Err(AppError::SessionClosed);
        }
        let line = menu.reserve(item_id, quantity)?;
        let Some(total) = self.total.checked_add(line.line_total) else {
            menu.release(line.item_id, line.quantity);
            return Err(AppError::InvalidQuantity(format!(
                "adding {} x {} exceeds the largest billable amount",
                line.quantity, line.item_name
            )));
        };
        self.total = total;
        self.lines.push(line);
        if !menu.any_in_stock() {
            self.state = SessionState::Finished;
        }
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Drops the session and hands every reserved line back to `menu`.
    pub fn cancel(self, menu: &mut MenuStore) -> Vec<OrderLine> {
        for line in &self.lines {
            menu.release(line.item_id, line.quantity);
        }
        self.lines
    }

    /// Ends the session, with or without lines.
    pub fn finish(self) -> OrderDraft {
        OrderDraft {
            customer_name: self.customer_name,
            lines: self.lines,
            total_amount: self.total,
        }
    }
}
