use std::collections::HashMap;

use crate::models::{Category, CustomerPreference, Order};

#[derive(Debug, Clone, Default)]
pub struct PreferenceTracker {
    by_customer: HashMap<String, CustomerPreference>,
}

impl PreferenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the customer's preference with one derived from `order`.
    /// `order_count` must already include `order` itself.
    pub fn upsert(
        &mut self,
        order: &Order,
        preferred_category: Category,
        order_count: u32,
    ) -> &CustomerPreference {
        let preference = CustomerPreference {
            customer_name: order.customer_name.clone(),
            preferred_category,
            last_order_date: order.created_at.date_naive(),
            total_spent: order.total_amount,
            order_count,
        };
        self.by_customer
            .insert(order.customer_name.clone(), preference);
        &self.by_customer[&order.customer_name]
    }

    pub fn get(&self, customer_name: &str) -> Option<&CustomerPreference> {
        self.by_customer.get(customer_name)
    }

    /// Number of distinct customers with a recorded order.
    pub fn customer_count(&self) -> usize {
        self.by_customer.len()
    }
}
