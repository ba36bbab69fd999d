use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::rounding::{is_negligible, round_to_cents};

/// Running balance between two members of a group.
///
/// The pair is stored ordered (`first_user_id < second_user_id`). A positive
/// `amount` means the second user owes the first; a negative one means the
/// first owes the second.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BalanceRecord {
    pub group_id: String,
    pub first_user_id: String,
    pub second_user_id: String,
    pub amount: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub updated_at: DateTime<Utc>,
}

/// Orders two user ids the way ledger keys are stored.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
    if a < b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl BalanceRecord {
    pub fn empty(group_id: &str, a: &str, b: &str) -> Self {
        let (first, second) = pair_key(a, b);
        BalanceRecord {
            group_id: group_id.to_string(),
            first_user_id: first,
            second_user_id: second,
            amount: 0.0,
            updated_at: Utc::now(),
        }
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.first_user_id == user_id || self.second_user_id == user_id
    }

    /// Adds `amount` to what `debtor_id` owes `creditor_id`. A negative
    /// amount reduces the debt.
    pub fn add_debt(&mut self, debtor_id: &str, creditor_id: &str, amount: f64) {
        if debtor_id == self.second_user_id && creditor_id == self.first_user_id {
            self.amount += amount;
        } else {
            self.amount -= amount;
        }
        self.amount = round_to_cents(self.amount);
        self.updated_at = Utc::now();
    }

    pub fn debt(&self) -> Option<Debt> {
        if is_negligible(self.amount) {
            return None;
        }
        let (debtor_id, creditor_id) = if self.amount > 0.0 {
            (&self.second_user_id, &self.first_user_id)
        } else {
            (&self.first_user_id, &self.second_user_id)
        };
        Some(Debt {
            debtor_id: debtor_id.clone(),
            creditor_id: creditor_id.clone(),
            amount: self.amount.abs(),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Debt {
    pub debtor_id: String,
    pub creditor_id: String,
    pub amount: f64,
}
