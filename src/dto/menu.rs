use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{dto::InputValue, models::MenuItem};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub price: i64,
    pub category: String,
    pub stock: i64,
}

/// Replaces one field: `name`, `price`, `category` or `stock`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMenuItemRequest {
    pub field: String,
    pub value: InputValue,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuQuery {
    /// Admin view: also list items with no stock left.
    pub include_out_of_stock: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteMenuItemQuery {
    pub confirm: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub deleted: bool,
    pub item: Option<MenuItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MenuList {
    #[schema(value_type = Vec<MenuItem>)]
    pub items: Vec<MenuItem>,
}
