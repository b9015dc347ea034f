//! Bond pricing calculations.
//!
//! This module provides:
//! - [`present_value`]: Periodic discounting of a cash flow sequence
//! - [`YieldSolver`]: Newton-Raphson yield-to-maturity solver
//! - [`YieldResult`]: Result type for yield calculations

mod yield_solver;

pub use yield_solver::{YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};

/// Discount factor for `periods` periods at a periodic `rate`.
#[must_use]
pub fn discount_factor(rate: f64, periods: u32) -> f64 {
    1.0 / (1.0 + rate).powf(f64::from(periods))
}

/// Present value of a cash flow sequence at a periodic discount rate.
///
/// The flow at zero-based index `i` is discounted over `i + 1` periods:
///
/// `PV = sum(c_i / (1 + rate)^(i + 1))`
///
/// The rate is per coupon period; no annualization is applied. A rate of
/// `-1` yields a non-finite result.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::pricing::present_value;
///
/// let pv = present_value(&[50.0, 1050.0], 0.05);
/// assert!((pv - 1000.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn present_value(cash_flows: &[f64], rate: f64) -> f64 {
    let growth = 1.0 + rate;
    cash_flows
        .iter()
        .zip(1u32..)
        .map(|(amount, period)| amount / growth.powf(f64::from(period)))
        .sum()
}
