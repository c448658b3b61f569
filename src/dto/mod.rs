use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub mod menu;
pub mod orders;

/// A form value that may arrive as a JSON number or as typed text. Any other
/// JSON (fractions, booleans, objects) lands in `Other` and is rejected when
/// read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum InputValue {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl InputValue {
    pub fn as_text(&self) -> String {
        match self {
            InputValue::Number(n) => n.to_string(),
            InputValue::Text(s) => s.clone(),
            InputValue::Other(v) => v.to_string(),
        }
    }

    /// Reads the value as an order quantity. Sign and range are checked
    /// against stock later.
    pub fn quantity(&self) -> AppResult<i64> {
        match self {
            InputValue::Number(n) => Ok(*n),
            InputValue::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                AppError::InvalidQuantity(format!("'{}' is not a valid number", s.trim()))
            }),
            InputValue::Other(v) => Err(AppError::InvalidQuantity(format!(
                "'{v}' is not a whole number"
            ))),
        }
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        InputValue::Number(n)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}
