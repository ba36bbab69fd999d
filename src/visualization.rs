use crate::core::errors::SettleUpError;
use crate::core::models::BalanceSummary;
use crate::core::rounding::round_to_cents;
use crate::core::settlement_reducer::Position;
use serde_json::{Value, json};
use tracing::{debug, error};

const BASE_COLORS: [(u8, u8, u8); 5] = [
    (75, 192, 192),  // Teal
    (255, 99, 132),  // Red
    (54, 162, 235),  // Blue
    (255, 206, 86),  // Yellow
    (153, 102, 255), // Purple
];

// Generates Chart.js configuration for visualizing who owes whom
pub struct Visualization;

impl Visualization {
    /// Generates a Chart.js bar chart of every participant's balance for one
    /// expense.
    ///
    /// # Returns
    /// A JSON Value containing the Chart.js configuration, or
    /// `NoBalancesAvailable` if the summary has no participants.
    pub fn generate_balance_chart(summary: &BalanceSummary, title: &str) -> Result<Value, SettleUpError> {
        if summary.participants.is_empty() {
            error!("No balances to chart for {}", title);
            return Err(SettleUpError::NoBalancesAvailable);
        }

        let labels: Vec<String> = summary.participants.iter().map(|p| p.name.clone()).collect();
        let data: Vec<f64> = summary.participants.iter().map(|p| round_to_cents(p.balance)).collect();
        debug!("Processed {} participants with balances for chart", labels.len());

        Ok(Self::bar_chart(labels, data, title))
    }

    /// Same chart for net positions taken from a group ledger.
    pub fn generate_ledger_chart(positions: &[Position], title: &str) -> Result<Value, SettleUpError> {
        if positions.is_empty() {
            error!("No ledger positions to chart for {}", title);
            return Err(SettleUpError::NoBalancesAvailable);
        }

        let labels: Vec<String> = positions.iter().map(|p| p.name.clone()).collect();
        let data: Vec<f64> = positions.iter().map(|p| round_to_cents(p.balance)).collect();
        debug!("Processed {} ledger positions for chart", labels.len());

        Ok(Self::bar_chart(labels, data, title))
    }

    fn bar_chart(labels: Vec<String>, data: Vec<f64>, title: &str) -> Value {
        // Cycle the palette so any number of members gets a color
        let mut background_colors = Vec::with_capacity(labels.len());
        let mut border_colors = Vec::with_capacity(labels.len());
        for i in 0..labels.len() {
            let (r, g, b) = BASE_COLORS[i % BASE_COLORS.len()];
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Balances",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "title": {
                            "display": true,
                            "text": "Balance (Currency)"
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Members"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": title
                    }
                }
            }
        })
    }
}
