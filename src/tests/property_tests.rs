use proptest::prelude::*;

use crate::core::balance_calculator::compute_balances;
use crate::core::models::{Participant, Settlement};
use crate::core::settlement_reducer::{ReductionStrategy, calculate_settlement_plan};

fn build_participants(entries: &[(u32, bool)]) -> Vec<Participant> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, (cents, participating))| {
            Participant::new(
                format!("p{}", idx),
                format!("Member {}", idx),
                f64::from(*cents) / 100.0,
                *participating,
            )
        })
        .collect()
}

fn strategy_from(resort: bool) -> ReductionStrategy {
    if resort {
        ReductionStrategy::Resort
    } else {
        ReductionStrategy::HeadOnly
    }
}

fn flow(settlements: &[Settlement], id: &str) -> (f64, f64) {
    let inflow: f64 = settlements.iter().filter(|s| s.to_id == id).map(|s| s.amount).sum();
    let outflow: f64 = settlements.iter().filter(|s| s.from_id == id).map(|s| s.amount).sum();
    (inflow, outflow)
}

proptest! {
    #[test]
    fn balances_sum_to_unclaimed_credit(
        entries in prop::collection::vec((0u32..=1_000_000, any::<bool>()), 0..=10),
    ) {
        let participants = build_participants(&entries);
        let summary = compute_balances(&participants);
        prop_assert!((summary.balance_sum() - summary.unclaimed_credit()).abs() < 0.01);
    }

    #[test]
    fn balances_sum_to_zero_when_everyone_participates(
        amounts in prop::collection::vec(0u32..=1_000_000, 1..=10),
    ) {
        let entries: Vec<(u32, bool)> = amounts.into_iter().map(|a| (a, true)).collect();
        let summary = compute_balances(&build_participants(&entries));
        prop_assert!(summary.balance_sum().abs() < 0.01);
    }

    #[test]
    fn settlements_match_balances(
        amounts in prop::collection::vec(0u32..=1_000_000, 1..=10),
        resort in any::<bool>(),
    ) {
        let entries: Vec<(u32, bool)> = amounts.into_iter().map(|a| (a, true)).collect();
        let participants = build_participants(&entries);
        let plan = calculate_settlement_plan(&participants, strategy_from(resort));
        let slack = 0.01 * plan.participants.len() as f64;

        for participant in &plan.participants {
            let (inflow, outflow) = flow(&plan.settlements, &participant.id);
            if participant.balance > 0.0 {
                prop_assert_eq!(outflow, 0.0);
                prop_assert!(inflow <= participant.balance + 0.01);
                prop_assert!((inflow - participant.balance).abs() <= slack);
            } else if participant.balance < 0.0 {
                prop_assert_eq!(inflow, 0.0);
                prop_assert!(outflow <= participant.balance.abs() + 0.01);
                prop_assert!((outflow + participant.balance).abs() <= slack);
            } else {
                prop_assert_eq!(inflow, 0.0);
                prop_assert_eq!(outflow, 0.0);
            }
        }
    }

    #[test]
    fn settlement_count_is_bounded(
        entries in prop::collection::vec((0u32..=1_000_000, any::<bool>()), 0..=10),
        resort in any::<bool>(),
    ) {
        let participants = build_participants(&entries);
        let plan = calculate_settlement_plan(&participants, strategy_from(resort));
        let creditors = plan.participants.iter().filter(|p| p.balance > 0.0).count();
        let debtors = plan.participants.iter().filter(|p| p.balance < 0.0).count();

        if creditors == 0 || debtors == 0 {
            prop_assert!(plan.settlements.is_empty());
        } else {
            prop_assert!(plan.settlements.len() <= creditors + debtors - 1);
        }
    }

    #[test]
    fn settlements_are_positive_and_never_to_self(
        entries in prop::collection::vec((0u32..=1_000_000, any::<bool>()), 0..=10),
        resort in any::<bool>(),
    ) {
        let plan = calculate_settlement_plan(&build_participants(&entries), strategy_from(resort));
        for settlement in &plan.settlements {
            prop_assert!(settlement.amount > 0.0);
            prop_assert_ne!(&settlement.from_id, &settlement.to_id);
        }
    }

    #[test]
    fn identical_input_gives_identical_plan(
        entries in prop::collection::vec((0u32..=1_000_000, any::<bool>()), 0..=10),
        resort in any::<bool>(),
    ) {
        let participants = build_participants(&entries);
        let first = calculate_settlement_plan(&participants, strategy_from(resort));
        let second = calculate_settlement_plan(&participants, strategy_from(resort));
        prop_assert_eq!(first, second);
    }
}
