use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::participant::ParticipantWithBalance;
use super::settlement::Settlement;

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BalanceSummary {
    pub total_expense: f64,
    pub individual_share: f64,
    pub participant_count: usize,
    pub participants: Vec<ParticipantWithBalance>,
}

impl BalanceSummary {
    /// Sum of all balances. Zero (within tolerance) unless a
    /// non-participating member paid something.
    pub fn balance_sum(&self) -> f64 {
        self.participants.iter().map(|p| p.balance).sum()
    }

    /// What non-participating members paid. Their credit is never netted
    /// against the participating total, so nobody is assigned to repay it.
    pub fn unclaimed_credit(&self) -> f64 {
        self.participants
            .iter()
            .filter(|p| !p.is_participating && p.amount_paid > 0.0)
            .map(|p| p.amount_paid)
            .sum()
    }

    pub fn participant(&self, id: &str) -> Option<&ParticipantWithBalance> {
        self.participants.iter().find(|p| p.id == id)
    }
}

/// Balances together with the transfers that settle them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SettlementPlan {
    pub total_expense: f64,
    pub individual_share: f64,
    pub participant_count: usize,
    pub participants: Vec<ParticipantWithBalance>,
    pub settlements: Vec<Settlement>,
}

impl SettlementPlan {
    pub fn new(summary: BalanceSummary, settlements: Vec<Settlement>) -> Self {
        SettlementPlan {
            total_expense: summary.total_expense,
            individual_share: summary.individual_share,
            participant_count: summary.participant_count,
            participants: summary.participants,
            settlements,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}
