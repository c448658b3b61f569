use cafe_pos::{classify::classify_customer, models::CustomerTier};

#[test]
fn thresholds_are_exclusive() {
    assert_eq!(classify_customer(100, 1), CustomerTier::New);
    assert_eq!(classify_customer(101, 1), CustomerTier::Occasional);
    assert_eq!(classify_customer(500, 1), CustomerTier::Occasional);
    assert_eq!(classify_customer(501, 1), CustomerTier::Regular);
    assert_eq!(classify_customer(1000, 10), CustomerTier::Regular);
    assert_eq!(classify_customer(1001, 5), CustomerTier::Regular);
    assert_eq!(classify_customer(1001, 6), CustomerTier::Vip);
}

#[test]
fn zero_spend_is_new() {
    assert_eq!(classify_customer(0, 0), CustomerTier::New);
    assert_eq!(classify_customer(-20, 3), CustomerTier::New);
}

// 300 clears the exclusive 100 bound, so it is Occasional rather than New.
#[test]
fn three_hundred_is_occasional() {
    assert_eq!(classify_customer(300, 1), CustomerTier::Occasional);
}

#[test]
fn labels() {
    assert_eq!(CustomerTier::New.to_string(), "New Customer");
    assert_eq!(CustomerTier::Occasional.to_string(), "Occasional Customer");
    assert_eq!(CustomerTier::Regular.to_string(), "Regular Customer");
    assert_eq!(CustomerTier::Vip.to_string(), "VIP Customer");
    assert_eq!(
        serde_json::to_string(&CustomerTier::Vip).unwrap(),
        "\"VIP Customer\""
    );
}
