//! Currency rounding helpers shared by the calculator and the reducer.
//!
//! Amounts are plain `f64`. Transfers are rounded to cents and anything
//! within [`SETTLEMENT_TOLERANCE`] of zero counts as settled.

use crate::constants::{AMOUNT_DECIMALS, SETTLEMENT_TOLERANCE};

/// Rounds to two decimal places, half away from zero.
///
/// Values too large to scale without overflowing have no fractional cents
/// anyway and come back unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    let factor = 10f64.powi(AMOUNT_DECIMALS);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

pub fn is_negligible(value: f64) -> bool {
    value.abs() < SETTLEMENT_TOLERANCE
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    is_negligible(a - b)
}

/// Renders an amount with exactly two decimals, e.g. `150` -> `"150.00"`.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

/// True when `value` carries no more than two decimal places.
pub fn has_at_most_cents(value: f64) -> bool {
    let scaled = value * 10f64.powi(AMOUNT_DECIMALS);
    (scaled - scaled.round()).abs() < 1e-6
}
