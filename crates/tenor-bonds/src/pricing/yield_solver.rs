//! Yield-to-maturity solver.
//!
//! Finds the periodic discount rate at which the present value of a cash flow
//! sequence matches a target, using Newton-Raphson with a forward
//! finite-difference derivative.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::pricing::{present_value, YieldSolver};
//!
//! let flows = [0.0, 0.0, 0.0, 0.0, 1000.0];
//! let target = present_value(&flows, 0.06);
//!
//! let result = YieldSolver::new().solve(&flows, target).unwrap();
//! assert!((result.yield_value - 0.06).abs() < 1e-4);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_math::solvers::{newton_raphson_forward, SolverConfig};

use crate::error::{BondError, BondResult};
use crate::pricing::present_value;

/// Starting rate for the Newton iteration.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (periodic rate, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of Newton updates performed before converging.
    pub iterations: u32,
    /// Present value at the yield minus the target.
    pub residual: f64,
}

/// Yield-to-maturity solver.
///
/// Defaults: initial guess 0.05, absolute price tolerance 0.0001, at most 1000
/// iterations. The finite-difference bump equals the tolerance unless set
/// explicitly with [`YieldSolver::with_bump`].
#[derive(Debug, Clone)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Starting rate.
    initial_guess: f64,
    /// Finite-difference step; follows the tolerance when unset.
    bump: Option<f64>,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
            bump: None,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the starting rate.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the finite-difference step independently of the tolerance.
    #[must_use]
    pub fn with_bump(mut self, bump: f64) -> Self {
        self.bump = Some(bump);
        self
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the finite-difference step in effect.
    #[must_use]
    pub fn bump(&self) -> f64 {
        self.bump.unwrap_or(self.config.tolerance)
    }

    /// Solves for the rate at which `present_value(cash_flows, rate)` equals `target`.
    ///
    /// # Errors
    ///
    /// `BondError::InvalidSpec` for an empty cash flow sequence.
    /// `BondError::YieldConvergenceFailed` when the iteration does not reach
    /// the tolerance within the iteration budget.
    pub fn solve(&self, cash_flows: &[f64], target: f64) -> BondResult<YieldResult> {
        if cash_flows.is_empty() {
            return Err(BondError::invalid_spec("No cash flows to discount"));
        }

        let result = newton_raphson_forward(
            |rate| present_value(cash_flows, rate),
            target,
            self.initial_guess,
            self.bump(),
            &self.config,
        )?;

        debug!(
            "Solved yield {:.8} for target {} in {} iterations",
            result.root, target, result.iterations
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let solver = YieldSolver::new();
        assert_relative_eq!(solver.config().tolerance, 0.0001);
        assert_eq!(solver.config().max_iterations, 1000);
        assert_relative_eq!(solver.bump(), 0.0001);
    }

    #[test]
    fn test_bump_follows_tolerance() {
        let solver = YieldSolver::new().with_tolerance(1e-8);
        assert_relative_eq!(solver.bump(), 1e-8);

        let solver = solver.with_bump(1e-6);
        assert_relative_eq!(solver.bump(), 1e-6);
    }

    #[test]
    fn test_par_coupon_bond() {
        let flows = [5.0, 5.0, 5.0, 5.0, 105.0];
        let result = YieldSolver::new().solve(&flows, 100.0).unwrap();

        assert_relative_eq!(result.yield_value, 0.05, epsilon = 1e-4);
        assert!(result.residual.abs() < 1e-4);
    }

    #[test]
    fn test_initial_guess_returned_when_already_priced() {
        let flows = [0.0, 1000.0];
        let target = present_value(&flows, DEFAULT_INITIAL_GUESS);
        let result = YieldSolver::new().solve(&flows, target).unwrap();

        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.yield_value, DEFAULT_INITIAL_GUESS);
    }

    #[test]
    fn test_discount_and_premium() {
        let flows = [3.0, 3.0, 3.0, 103.0];

        let discount = YieldSolver::new().solve(&flows, 95.0).unwrap();
        assert!(discount.yield_value > 0.03);

        let premium = YieldSolver::new().solve(&flows, 105.0).unwrap();
        assert!(premium.yield_value < 0.03);
    }

    #[test]
    fn test_tighter_tolerance() {
        let flows = [0.0, 0.0, 1000.0];
        let target = present_value(&flows, 0.0725);

        let result = YieldSolver::new()
            .with_tolerance(1e-10)
            .with_bump(1e-7)
            .solve(&flows, target)
            .unwrap();

        assert_relative_eq!(result.yield_value, 0.0725, epsilon = 1e-10);
    }

    #[test]
    fn test_iteration_budget() {
        let flows = [0.0, 0.0, 0.0, 1000.0];
        let target = present_value(&flows, 0.2);

        let err = YieldSolver::new()
            .with_max_iterations(1)
            .solve(&flows, target)
            .unwrap_err();

        assert!(matches!(
            err,
            BondError::YieldConvergenceFailed { iterations: 1, .. }
        ));
    }

    #[test]
    fn test_negative_target_never_loops_forever() {
        let flows = [25.0, 1025.0];
        let result = YieldSolver::new().solve(&flows, -50.0);

        assert!(result.unwrap_err().is_convergence_failure());
    }

    #[test]
    fn test_empty_cash_flows() {
        let err = YieldSolver::new().solve(&[], 100.0).unwrap_err();
        assert!(matches!(err, BondError::InvalidSpec { .. }));
    }
}
