use serde_json::json;

use crate::core::balance_calculator::compute_balances;
use crate::core::errors::SettleUpError;
use crate::core::models::BalanceSummary;
use crate::core::settlement_reducer::Position;
use crate::tests::member;
use crate::visualization::Visualization;

#[test]
fn test_balance_chart_has_one_bar_per_participant() {
    let summary = compute_balances(&[member("a", "Alice", 100.0), member("b", "Bob", 0.0), member("c", "Carol", 0.0)]);
    let chart = Visualization::generate_balance_chart(&summary, "Dinner").unwrap();

    assert_eq!(chart["type"], "bar");
    assert_eq!(chart["data"]["labels"], json!(["Alice", "Bob", "Carol"]));
    assert_eq!(chart["data"]["datasets"][0]["data"], json!([66.67, -33.33, -33.33]));
    assert_eq!(chart["options"]["plugins"]["title"]["text"], "Dinner");
}

#[test]
fn test_palette_cycles_past_five_members() {
    let participants: Vec<_> = (0..6)
        .map(|i| member(&format!("m{}", i), &format!("Member {}", i), 10.0))
        .collect();
    let chart = Visualization::generate_balance_chart(&compute_balances(&participants), "Six").unwrap();
    let colors = &chart["data"]["datasets"][0]["backgroundColor"];
    assert_eq!(colors.as_array().map(Vec::len), Some(6));
    assert_eq!(colors[0], colors[5]);
}

#[test]
fn test_empty_summary_has_nothing_to_chart() {
    let result = Visualization::generate_balance_chart(&BalanceSummary::default(), "Empty");
    assert!(matches!(result, Err(SettleUpError::NoBalancesAvailable)));

    let result = Visualization::generate_ledger_chart(&[], "Empty");
    assert!(matches!(result, Err(SettleUpError::NoBalancesAvailable)));
}

#[test]
fn test_ledger_chart_uses_position_names() {
    let positions = vec![Position::new("a", "Alice", 12.5), Position::new("b", "Bob", -12.5)];
    let chart = Visualization::generate_ledger_chart(&positions, "Trip").unwrap();
    assert_eq!(chart["data"]["labels"], json!(["Alice", "Bob"]));
    assert_eq!(chart["data"]["datasets"][0]["data"], json!([12.5, -12.5]));
}
