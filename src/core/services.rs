use crate::config::Config;
use crate::constants::{
    BALANCE_QUERIED, BALANCES_COMPUTED, EXPENSE_RECORDED, LEDGER_SIMPLIFIED, MAX_ID_LENGTH, MAX_PAYMENT_AMOUNT,
    PAYMENT_RECORDED, SETTLEMENTS_CALCULATED,
};
use crate::core::balance_calculator::{compute_balances, validate_participants};
use crate::core::errors::SettleUpError;
use crate::core::models::{
    audit::AppLog,
    ledger::{BalanceRecord, Debt},
    participant::Participant,
    settlement::Settlement,
    summary::{BalanceSummary, SettlementPlan},
};
use crate::core::rounding::has_at_most_cents;
use crate::core::settlement_reducer::{Position, ReductionStrategy, calculate_settlement_plan, reduce_positions};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{debug, info};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq)]
pub struct UserBalancesResponse {
    pairwise_balances: Vec<Debt>,
    simplified_balances: Vec<Settlement>,
}

impl UserBalancesResponse {
    pub fn pairwise_balances(&self) -> &[Debt] {
        &self.pairwise_balances
    }

    pub fn simplified_balances(&self) -> &[Settlement] {
        &self.simplified_balances
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    pub strict_validation: bool,
    pub strategy: ReductionStrategy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            strict_validation: true,
            strategy: ReductionStrategy::HeadOnly,
        }
    }
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        EngineOptions {
            strict_validation: config.strict_validation,
            strategy: config.reduction_strategy,
        }
    }
}

pub struct SettlementService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
    options: EngineOptions,
}

impl<L: LoggingService, S: Storage> SettlementService<L, S> {
    pub fn new(storage: S, logging: L, options: EngineOptions) -> Self {
        SettlementService {
            storage,
            logging,
            options,
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    async fn log_and_audit(
        &self,
        group_id: Option<&str>,
        action: &str,
        log_details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), SettleUpError> {
        self.logging.log_action(action, log_details, group_id, user_id).await
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), SettleUpError> {
        if value.trim().is_empty() {
            return Err(SettleUpError::invalid_input(
                field,
                &format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.len() > max_length {
            return Err(SettleUpError::invalid_input(
                field,
                &format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(SettleUpError::invalid_input(
                field,
                &format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_payment_amount(&self, amount: f64) -> Result<(), SettleUpError> {
        if !amount.is_finite() {
            return Err(SettleUpError::invalid_input(
                "amount",
                "Invalid Amount",
                "Amount must be a finite number",
            ));
        }
        if amount <= 0.0 {
            return Err(SettleUpError::InvalidSettlementAmount);
        }
        if amount > MAX_PAYMENT_AMOUNT {
            return Err(SettleUpError::invalid_input(
                "amount",
                "Amount Too Large",
                "Amount cannot exceed 1,000,000",
            ));
        }
        if !has_at_most_cents(amount) {
            return Err(SettleUpError::invalid_input(
                "amount",
                "Invalid Amount",
                "Amount cannot have more than 2 decimal places",
            ));
        }
        Ok(())
    }

    fn check_participants(&self, participants: &[Participant]) -> Result<(), SettleUpError> {
        if self.options.strict_validation {
            validate_participants(participants)?;
        }
        Ok(())
    }

    pub async fn compute_balances(&self, participants: &[Participant]) -> Result<BalanceSummary, SettleUpError> {
        self.check_participants(participants)?;
        let summary = compute_balances(participants);

        self.log_and_audit(
            None,
            BALANCES_COMPUTED,
            json!({
                "participant_count": summary.participant_count,
                "total_expense": summary.total_expense,
                "individual_share": summary.individual_share
            }),
            None,
        )
        .await?;

        Ok(summary)
    }

    pub async fn calculate_settlements(
        &self,
        participants: &[Participant],
        strategy: Option<ReductionStrategy>,
    ) -> Result<SettlementPlan, SettleUpError> {
        self.check_participants(participants)?;
        let strategy = strategy.unwrap_or(self.options.strategy);
        let plan = calculate_settlement_plan(participants, strategy);
        debug!(
            "Calculated {} settlements for {} participants",
            plan.settlements.len(),
            plan.participants.len()
        );

        self.log_and_audit(
            None,
            SETTLEMENTS_CALCULATED,
            json!({
                "participant_count": plan.participant_count,
                "total_expense": plan.total_expense,
                "settlement_count": plan.settlements.len()
            }),
            None,
        )
        .await?;

        Ok(plan)
    }

    async fn apply_debt(
        &self,
        group_id: &str,
        debtor_id: &str,
        creditor_id: &str,
        amount: f64,
    ) -> Result<BalanceRecord, SettleUpError> {
        self.storage
            .update_balance_record(group_id, debtor_id, creditor_id, amount)
            .await
    }

    /// Settles one expense and folds its transfers into the group ledger.
    pub async fn record_expense(
        &self,
        group_id: &str,
        participants: &[Participant],
        recorded_by: Option<&str>,
    ) -> Result<SettlementPlan, SettleUpError> {
        self.validate_string_input("group_id", group_id, MAX_ID_LENGTH)?;
        self.check_participants(participants)?;

        let plan = calculate_settlement_plan(participants, self.options.strategy);

        // The audit entry goes first; the ledger is left untouched when it fails.
        self.log_and_audit(
            Some(group_id),
            EXPENSE_RECORDED,
            json!({
                "group_id": group_id,
                "total_expense": plan.total_expense,
                "participant_ids": participants.iter().map(|p| p.id.clone()).collect::<Vec<_>>(),
                "settlement_count": plan.settlements.len()
            }),
            recorded_by,
        )
        .await?;

        for participant in participants {
            self.storage
                .save_member_name(group_id, &participant.id, &participant.name)
                .await?;
        }
        for settlement in &plan.settlements {
            self.apply_debt(group_id, &settlement.from_id, &settlement.to_id, settlement.amount)
                .await?;
        }

        info!(
            "Recorded expense of {:.2} in group {} with {} settlements",
            plan.total_expense,
            group_id,
            plan.settlements.len()
        );

        Ok(plan)
    }

    /// Records money `from_user_id` handed to `to_user_id`, reducing what
    /// the former owes the latter. Overpaying flips the direction.
    pub async fn record_payment(
        &self,
        group_id: &str,
        from_user_id: &str,
        to_user_id: &str,
        amount: f64,
        recorded_by: Option<&str>,
    ) -> Result<BalanceRecord, SettleUpError> {
        self.validate_string_input("from_user_id", from_user_id, MAX_ID_LENGTH)?;
        self.validate_string_input("to_user_id", to_user_id, MAX_ID_LENGTH)?;
        if from_user_id == to_user_id {
            return Err(SettleUpError::SelfSettlement);
        }
        self.validate_payment_amount(amount)?;
        if !self.storage.group_exists(group_id).await? {
            return Err(SettleUpError::GroupNotFound(group_id.to_string()));
        }

        self.log_and_audit(
            Some(group_id),
            PAYMENT_RECORDED,
            json!({
                "group_id": group_id,
                "from_user_id": from_user_id,
                "to_user_id": to_user_id,
                "amount": amount
            }),
            recorded_by,
        )
        .await?;

        self.apply_debt(group_id, from_user_id, to_user_id, -amount).await
    }

    pub async fn get_group_ledger(&self, group_id: &str) -> Result<Vec<BalanceRecord>, SettleUpError> {
        if !self.storage.group_exists(group_id).await? {
            return Err(SettleUpError::GroupNotFound(group_id.to_string()));
        }
        self.storage.get_group_balance_records(group_id).await
    }

    /// Nets every pairwise ledger entry into one position per member,
    /// ordered by member id.
    pub async fn get_group_positions(&self, group_id: &str) -> Result<Vec<Position>, SettleUpError> {
        let records = self.get_group_ledger(group_id).await?;
        let names = self.storage.get_member_names(group_id).await?;

        let mut net: BTreeMap<String, f64> = names.keys().map(|id| (id.clone(), 0.0)).collect();
        for debt in records.iter().filter_map(BalanceRecord::debt) {
            *net.entry(debt.creditor_id).or_insert(0.0) += debt.amount;
            *net.entry(debt.debtor_id).or_insert(0.0) -= debt.amount;
        }

        Ok(net
            .into_iter()
            .map(|(id, balance)| {
                let name = names.get(&id).cloned().unwrap_or_else(|| id.clone());
                Position::new(id, name, balance)
            })
            .collect())
    }

    pub async fn simplify_group_debts(&self, group_id: &str) -> Result<Vec<Settlement>, SettleUpError> {
        let positions = self.get_group_positions(group_id).await?;
        let simplified = reduce_positions(&positions, ReductionStrategy::Resort);

        self.log_and_audit(
            Some(group_id),
            LEDGER_SIMPLIFIED,
            json!({ "group_id": group_id, "settlement_count": simplified.len() }),
            None,
        )
        .await?;

        Ok(simplified)
    }

    pub async fn get_user_balances(&self, group_id: &str, user_id: &str) -> Result<UserBalancesResponse, SettleUpError> {
        let records = self.get_group_ledger(group_id).await?;
        let pairwise_balances = records
            .iter()
            .filter(|r| r.involves(user_id))
            .filter_map(BalanceRecord::debt)
            .collect();

        let positions = self.get_group_positions(group_id).await?;
        let simplified_balances = reduce_positions(&positions, ReductionStrategy::Resort)
            .into_iter()
            .filter(|s| s.from_id == user_id || s.to_id == user_id)
            .collect();

        self.log_and_audit(
            Some(group_id),
            BALANCE_QUERIED,
            json!({ "group_id": group_id, "user_id": user_id }),
            Some(user_id),
        )
        .await?;

        Ok(UserBalancesResponse {
            pairwise_balances,
            simplified_balances,
        })
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SettleUpError> {
        self.logging.get_logs().await
    }

    pub async fn get_group_logs(&self, group_id: &str) -> Result<Vec<AppLog>, SettleUpError> {
        if !self.storage.group_exists(group_id).await? {
            return Err(SettleUpError::GroupNotFound(group_id.to_string()));
        }
        self.logging.get_group_logs(group_id).await
    }
}
