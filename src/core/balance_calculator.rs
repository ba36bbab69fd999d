use std::collections::HashSet;

use tracing::{debug, warn};

use crate::core::errors::SettleUpError;
use crate::core::models::{BalanceSummary, Participant, ParticipantWithBalance};

/// Splits the participating total equally and derives every participant's
/// share and balance. Output keeps input order.
///
/// Never fails: degenerate input (no participants, nobody participating)
/// yields zeroed totals. Run [`validate_participants`] first to reject
/// malformed input.
pub fn compute_balances(participants: &[Participant]) -> BalanceSummary {
    if participants.is_empty() {
        return BalanceSummary::default();
    }

    let (participating, non_participating): (Vec<&Participant>, Vec<&Participant>) =
        participants.iter().partition(|p| p.is_participating);

    if participating.is_empty() {
        debug!(
            "No participating members among {} participants, nothing is owed",
            participants.len()
        );
        return BalanceSummary {
            total_expense: 0.0,
            individual_share: 0.0,
            participant_count: 0,
            participants: participants
                .iter()
                .map(|p| ParticipantWithBalance::from_participant(p, 0.0))
                .collect(),
        };
    }

    let participant_count = participating.len();
    let total_expense: f64 = participating.iter().map(|p| p.amount_paid).sum();
    let individual_share = total_expense / participant_count as f64;

    let stranded: f64 = non_participating.iter().map(|p| p.amount_paid).filter(|a| *a > 0.0).sum();
    if stranded > 0.0 {
        warn!(
            "Non-participating members paid {:.2} that is not part of the shared total",
            stranded
        );
    }

    let participants = participants
        .iter()
        .map(|p| {
            let share = if p.is_participating { individual_share } else { 0.0 };
            ParticipantWithBalance::from_participant(p, share)
        })
        .collect();

    debug!(
        "Computed balances: total {:.2} split {} ways at {:.2}",
        total_expense, participant_count, individual_share
    );

    BalanceSummary {
        total_expense,
        individual_share,
        participant_count,
        participants,
    }
}

/// Rejects input that `compute_balances` would otherwise accept silently:
/// blank ids, duplicate ids, negative or non-finite amounts.
pub fn validate_participants(participants: &[Participant]) -> Result<(), SettleUpError> {
    let mut seen = HashSet::new();
    for participant in participants {
        if participant.id.trim().is_empty() {
            return Err(SettleUpError::EmptyParticipantId);
        }
        if !participant.amount_paid.is_finite() {
            return Err(SettleUpError::NonFiniteAmount(participant.id.clone()));
        }
        if participant.amount_paid < 0.0 {
            return Err(SettleUpError::NegativeAmount(participant.id.clone()));
        }
        if !seen.insert(participant.id.as_str()) {
            return Err(SettleUpError::DuplicateParticipant(participant.id.clone()));
        }
    }
    Ok(())
}
