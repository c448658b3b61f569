use crate::models::CustomerTier;

/// Maps spend and order count to a tier. Every bound is exclusive.
pub fn classify_customer(total_spent: i64, order_count: u32) -> CustomerTier {
    if total_spent > 1000 && order_count > 5 {
        CustomerTier::Vip
    } else if total_spent > 500 {
        CustomerTier::Regular
    } else if total_spent > 100 {
        CustomerTier::Occasional
    } else {
        CustomerTier::New
    }
}
