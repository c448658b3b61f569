use std::collections::HashMap;

use crate::models::Order;

/// Append-only log of completed orders.
#[derive(Debug, Clone, Default)]
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `order` unless it has no lines. Returns whether it was kept.
    pub fn record(&mut self, order: Order) -> bool {
        if order.is_empty() {
            return false;
        }
        self.orders.push(order);
        true
    }

    /// Sum of all order totals, pinned at `i64::MAX` rather than wrapping.
    pub fn total_revenue(&self) -> i64 {
        self.orders
            .iter()
            .fold(0i64, |sum, order| sum.saturating_add(order.total_amount))
    }

    pub fn orders_for(&self, customer_name: &str) -> usize {
        self.orders
            .iter()
            .filter(|order| order.customer_name == customer_name)
            .count()
    }

    /// The most ordered item name by total quantity. On a tie the name seen
    /// first while scanning the log in recording order wins.
    pub fn most_popular(&self) -> Option<&str> {
        let mut tally: Vec<(&str, i64)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for line in self.orders.iter().flat_map(|order| &order.lines) {
            let name = line.item_name.as_str();
            match index.get(name) {
                Some(&i) => tally[i].1 += i64::from(line.quantity),
                None => {
                    index.insert(name, tally.len());
                    tally.push((name, i64::from(line.quantity)));
                }
            }
        }

        let mut best: Option<(&str, i64)> = None;
        for (name, count) in tally {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((name, count));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Newest first, `limit` orders after skipping `offset`.
    pub fn page(&self, limit: usize, offset: usize) -> Vec<Order> {
        self.orders
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
