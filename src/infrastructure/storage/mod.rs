pub mod in_memory;

use crate::core::errors::SettleUpError;
use crate::core::models::ledger::BalanceRecord;
use async_trait::async_trait;
use std::collections::HashMap;

/// Per-pair running ledger plus the display names seen for each group.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Adds `amount` to what `debtor_id` owes `creditor_id`, creating the
    /// pair's record when missing. The read and the write happen under one
    /// lock so concurrent updates to the same pair are never lost.
    async fn update_balance_record(
        &self,
        group_id: &str,
        debtor_id: &str,
        creditor_id: &str,
        amount: f64,
    ) -> Result<BalanceRecord, SettleUpError>;
    async fn get_group_balance_records(&self, group_id: &str) -> Result<Vec<BalanceRecord>, SettleUpError>;
    async fn save_member_name(&self, group_id: &str, user_id: &str, name: &str) -> Result<(), SettleUpError>;
    async fn get_member_names(&self, group_id: &str) -> Result<HashMap<String, String>, SettleUpError>;
    async fn group_exists(&self, group_id: &str) -> Result<bool, SettleUpError>;
}
