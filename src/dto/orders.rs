use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::InputValue,
    models::{ItemId, Order, OrderLine},
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StartOrderRequest {
    /// Blank or missing means "Guest".
    #[serde(default)]
    pub customer_name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddLineRequest {
    pub item_id: ItemId,
    pub quantity: InputValue,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// Lines whose stock went back to the menu.
#[derive(Debug, Serialize, ToSchema)]
pub struct CancelledOrder {
    pub released: Vec<OrderLine>,
}
