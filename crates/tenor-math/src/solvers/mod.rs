//! Root-finding algorithms.
//!
//! - [`newton_raphson_forward`]: Newton-Raphson on `g(x) - target` with the
//!   derivative estimated by a forward finite difference
//!
//! # Example: Yield Calculation
//!
//! ```rust
//! use tenor_math::solvers::{newton_raphson_forward, SolverConfig};
//!
//! // Zero coupon: 1000 paid after 4 periods, observed at 792.09
//! let pv = |r: f64| 1000.0 / (1.0 + r).powi(4);
//!
//! let result = newton_raphson_forward(pv, 792.09, 0.05, 1e-4, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.06).abs() < 1e-4);
//! ```

mod newton;

pub use newton::newton_raphson_forward;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (`g(root) - target`).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!((config.tolerance - 0.0001).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config, SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS));
    }
}
