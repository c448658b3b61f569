use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beverage,
    Food,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beverage => "beverage",
            Category::Food => "food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beverage" => Ok(Category::Beverage),
            "food" => Ok(Category::Food),
            other => Err(AppError::Validation(format!(
                "category must be 'beverage' or 'food', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: i64,
    pub category: Category,
    pub stock: i32,
}

impl MenuItem {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub line_total: i64,
}

impl OrderLine {
    /// Prices `quantity` units of `item`. Fails when the line total does
    /// not fit in an `i64`.
    pub fn new(item: &MenuItem, quantity: i32) -> AppResult<Self> {
        let line_total = item.price.checked_mul(i64::from(quantity)).ok_or_else(|| {
            AppError::InvalidQuantity(format!(
                "{quantity} x {} exceeds the largest billable amount",
                item.name
            ))
        })?;
        Ok(Self {
            item_id: item.id,
            item_name: item.name.clone(),
            quantity,
            unit_price: item.price,
            line_total,
        })
    }
}

/// Customer classification derived from spend and order count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CustomerTier {
    #[serde(rename = "New Customer")]
    New,
    #[serde(rename = "Occasional Customer")]
    Occasional,
    #[serde(rename = "Regular Customer")]
    Regular,
    #[serde(rename = "VIP Customer")]
    Vip,
}

impl CustomerTier {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerTier::New => "New Customer",
            CustomerTier::Occasional => "Occasional Customer",
            CustomerTier::Regular => "Regular Customer",
            CustomerTier::Vip => "VIP Customer",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub receipt_number: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total_amount: i64,
    pub customer_type: CustomerTier,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerPreference {
    pub customer_name: String,
    pub preferred_category: Category,
    pub last_order_date: NaiveDate,
    /// Total of the most recent order, not a running sum.
    pub total_spent: i64,
    pub order_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Selecting,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Analytics {
    pub total_orders: usize,
    pub total_revenue: i64,
    pub unique_customers: usize,
    pub average_order_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShutdownReport {
    pub total_orders: usize,
    pub total_revenue: i64,
}

impl fmt::Display for ShutdownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Final report: {} orders, Rs {} revenue",
            self.total_orders, self.total_revenue
        )
    }
}
