use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::rounding::format_amount;

/// A single directed transfer from a debtor to a creditor.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Settlement {
    pub from_id: String,
    pub to_id: String,
    pub amount: f64,
    pub description: String,
}

impl Settlement {
    pub fn new(from_id: &str, from_name: &str, to_id: &str, to_name: &str, amount: f64) -> Self {
        Settlement {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            amount,
            description: format!("{} pays {} to {}", from_name, format_amount(amount), to_name),
        }
    }
}
