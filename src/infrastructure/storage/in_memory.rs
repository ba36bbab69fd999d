use crate::core::errors::SettleUpError;
use crate::core::models::ledger::{BalanceRecord, pair_key};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

type PairKey = (String, String, String);

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    // BTreeMap keeps ledger listings in a stable order
    records: Arc<RwLock<BTreeMap<PairKey, BalanceRecord>>>,
    member_names: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            member_names: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn record_key(group_id: &str, user_a: &str, user_b: &str) -> PairKey {
    let (first, second) = pair_key(user_a, user_b);
    (group_id.to_string(), first, second)
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn update_balance_record(
        &self,
        group_id: &str,
        debtor_id: &str,
        creditor_id: &str,
        amount: f64,
    ) -> Result<BalanceRecord, SettleUpError> {
        if debtor_id == creditor_id {
            return Err(SettleUpError::StorageError(format!(
                "Balance record pair ({}, {}) needs two distinct users",
                debtor_id, creditor_id
            )));
        }
        let mut records = self.records.write().await;
        let record = records
            .entry(record_key(group_id, debtor_id, creditor_id))
            .or_insert_with(|| BalanceRecord::empty(group_id, debtor_id, creditor_id));
        record.add_debt(debtor_id, creditor_id, amount);
        Ok(record.clone())
    }

    async fn get_group_balance_records(&self, group_id: &str) -> Result<Vec<BalanceRecord>, SettleUpError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|((gid, _, _), _)| gid == group_id)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn save_member_name(&self, group_id: &str, user_id: &str, name: &str) -> Result<(), SettleUpError> {
        let mut member_names = self.member_names.write().await;
        member_names
            .entry(group_id.to_string())
            .or_default()
            .insert(user_id.to_string(), name.to_string());
        Ok(())
    }

    async fn get_member_names(&self, group_id: &str) -> Result<HashMap<String, String>, SettleUpError> {
        let member_names = self.member_names.read().await;
        Ok(member_names.get(group_id).cloned().unwrap_or_default())
    }

    async fn group_exists(&self, group_id: &str) -> Result<bool, SettleUpError> {
        let member_names = self.member_names.read().await;
        Ok(member_names.contains_key(group_id))
    }
}
