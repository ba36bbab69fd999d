//! Greedy debt netting.
//!
//! Creditors are matched against debtors largest-to-largest. Each step
//! settles at least one of the two heads, so the result has at most
//! `creditors + debtors - 1` transfers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::core::balance_calculator::compute_balances;
use crate::core::models::{Participant, ParticipantWithBalance, Settlement, SettlementPlan};
use crate::core::rounding::{is_negligible, round_to_cents};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReductionStrategy {
    /// Sort once, then always match the current list heads.
    #[default]
    HeadOnly,
    /// Re-sort both lists after every transfer.
    Resort,
}

impl FromStr for ReductionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "head_only" | "head-only" | "headonly" => Ok(ReductionStrategy::HeadOnly),
            "resort" | "re-sort" => Ok(ReductionStrategy::Resort),
            other => Err(format!("unknown reduction strategy `{}`", other)),
        }
    }
}

/// Net position of one party entering the reducer.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub id: String,
    pub name: String,
    pub balance: f64,
}

impl Position {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: f64) -> Self {
        Position {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }
}

impl From<&ParticipantWithBalance> for Position {
    fn from(participant: &ParticipantWithBalance) -> Self {
        Position::new(participant.id.as_str(), participant.name.as_str(), participant.balance)
    }
}

struct Party<'a> {
    id: &'a str,
    name: &'a str,
    remaining: f64,
}

fn sort_creditors(creditors: &mut [Party<'_>]) {
    creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
}

fn sort_debtors(debtors: &mut [Party<'_>]) {
    debtors.sort_by(|a, b| a.remaining.total_cmp(&b.remaining));
}

/// Reduces participant balances to transfers using the default head-only
/// strategy.
pub fn generate_settlements(participants: &[ParticipantWithBalance]) -> Vec<Settlement> {
    generate_settlements_with(participants, ReductionStrategy::HeadOnly)
}

pub fn generate_settlements_with(
    participants: &[ParticipantWithBalance],
    strategy: ReductionStrategy,
) -> Vec<Settlement> {
    let positions: Vec<Position> = participants.iter().map(Position::from).collect();
    reduce_positions(&positions, strategy)
}

pub fn reduce_positions(positions: &[Position], strategy: ReductionStrategy) -> Vec<Settlement> {
    if positions.len() < 2 {
        return Vec::new();
    }

    let unbounded = positions.iter().filter(|p| !p.balance.is_finite()).count();
    if unbounded > 0 {
        warn!("Skipping {} positions with a non-finite balance", unbounded);
    }

    let mut creditors: Vec<Party<'_>> = positions
        .iter()
        .filter(|p| p.balance.is_finite() && p.balance > 0.0)
        .map(|p| Party {
            id: &p.id,
            name: &p.name,
            remaining: p.balance,
        })
        .collect();
    let mut debtors: Vec<Party<'_>> = positions
        .iter()
        .filter(|p| p.balance.is_finite() && p.balance < 0.0)
        .map(|p| Party {
            id: &p.id,
            name: &p.name,
            remaining: p.balance,
        })
        .collect();

    // sort_by is stable, so equal balances keep input order
    sort_creditors(&mut creditors);
    sort_debtors(&mut debtors);

    let mut settlements = Vec::new();
    while !creditors.is_empty() && !debtors.is_empty() {
        let creditor = &mut creditors[0];
        let debtor = &mut debtors[0];

        let transfer = round_to_cents(creditor.remaining.min(debtor.remaining.abs()));
        if transfer > 0.0 {
            settlements.push(Settlement::new(debtor.id, debtor.name, creditor.id, creditor.name, transfer));
            creditor.remaining -= transfer;
            debtor.remaining += transfer;
        }

        let creditor_done = is_negligible(creditor.remaining);
        let debtor_done = is_negligible(debtor.remaining);
        if creditor_done {
            creditors.remove(0);
        }
        if debtor_done {
            debtors.remove(0);
        }
        // A sub-cent pair that rounded to nothing must still leave the loop.
        if transfer <= 0.0 && !creditor_done && !debtor_done {
            break;
        }

        if strategy == ReductionStrategy::Resort {
            sort_creditors(&mut creditors);
            sort_debtors(&mut debtors);
        }
    }

    if !creditors.is_empty() || !debtors.is_empty() {
        debug!(
            "Left {} creditors and {} debtors unsettled",
            creditors.len(),
            debtors.len()
        );
    }

    settlements
}

/// Computes balances and the transfers that settle them in one pass.
pub fn calculate_settlement_plan(participants: &[Participant], strategy: ReductionStrategy) -> SettlementPlan {
    let summary = compute_balances(participants);
    let settlements = if summary.participant_count == 0 {
        Vec::new()
    } else {
        generate_settlements_with(&summary.participants, strategy)
    };
    SettlementPlan::new(summary, settlements)
}
