//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson search for `x` such that `g(x) = target`.
///
/// Each iteration evaluates `g(x)` once and `g(x + bump)` once, and uses the
/// forward difference `(g(x + bump) - g(x)) / bump` as the derivative:
///
/// `x_{n+1} = x_n - (g(x_n) - target) / g'(x_n)`
///
/// Convergence is declared when `|g(x) - target| < config.tolerance`; the
/// check happens before the derivative is estimated, so an initial guess that
/// already satisfies the tolerance returns with zero iterations.
///
/// # Arguments
///
/// * `g` - The function to invert
/// * `target` - The value `g` should reproduce
/// * `initial_guess` - Starting point for the iteration
/// * `bump` - Finite-difference step, must be positive and finite
/// * `config` - Solver configuration
///
/// # Errors
///
/// `MathError::InvalidInput` for a non-positive bump. `MathError::ConvergenceFailed`
/// when the iteration budget is exhausted or an iterate becomes non-finite.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton_raphson_forward, SolverConfig};
///
/// let square = |x: f64| x * x;
/// let result = newton_raphson_forward(square, 2.0, 1.5, 1e-6, &SolverConfig::default()).unwrap();
/// assert!((result.root * result.root - 2.0).abs() < 1e-4);
/// ```
pub fn newton_raphson_forward<G>(
    g: G,
    target: f64,
    initial_guess: f64,
    bump: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    G: Fn(f64) -> f64,
{
    if bump.is_nan() || bump.is_infinite() || bump <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "finite-difference bump must be positive and finite, got {bump}"
        )));
    }

    let mut x = initial_guess;
    let mut residual = f64::NAN;

    for iteration in 0..config.max_iterations {
        let value = g(x);
        residual = value - target;

        if residual.abs() < config.tolerance {
            debug!("Newton converged to {x} after {iteration} iterations (residual {residual:.3e})");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual,
            });
        }

        let derivative = (g(x + bump) - value) / bump;
        x -= residual / derivative;
        trace!("Newton iteration {iteration}: derivative {derivative:.6e}, next guess {x}");

        // Zero derivative or overflow; NaN never satisfies the tolerance check.
        if !x.is_finite() {
            warn!("Newton iterate became non-finite after {} iterations", iteration + 1);
            return Err(MathError::convergence_failed(iteration + 1, residual.abs()));
        }
    }

    warn!(
        "Newton failed to converge in {} iterations (residual {:.3e})",
        config.max_iterations, residual
    );
    Err(MathError::convergence_failed(
        config.max_iterations,
        residual.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sqrt_2() {
        let result =
            newton_raphson_forward(|x| x * x, 2.0, 1.5, 1e-6, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-4);
        assert!(result.residual.abs() < 1e-4);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_initial_guess_already_converged() {
        let result =
            newton_raphson_forward(|x| 3.0 * x, 0.15, 0.05, 1e-4, &SolverConfig::default())
                .unwrap();

        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.root, 0.05);
    }

    #[test]
    fn test_discount_factor_inversion() {
        // 1000 due in 5 periods at 6%
        let pv = |r: f64| 1000.0 / (1.0 + r).powi(5);
        let target = pv(0.06);

        let result = newton_raphson_forward(pv, target, 0.05, 1e-4, &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, 0.06, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_derivative_fails_fast() {
        let config = SolverConfig::default();
        let result = newton_raphson_forward(|_| 1.0, 0.0, 0.05, 1e-4, &config);

        match result {
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
            }) => {
                assert_eq!(iterations, 1);
                assert_relative_eq!(residual, 1.0);
            }
            other => panic!("expected convergence failure, got {other:?}"),
        }
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        // No real root: x^2 + 1 never reaches 0
        let config = SolverConfig::new(1e-4, 25);
        let result = newton_raphson_forward(|x| x * x + 1.0, 0.0, 0.5, 1e-4, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations, .. }) if iterations <= 25
        ));
    }

    #[test]
    fn test_zero_iteration_budget() {
        let config = SolverConfig::new(1e-4, 0);
        let result = newton_raphson_forward(|x| x, 0.0, 0.0, 1e-4, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_bump() {
        let config = SolverConfig::default();
        for bump in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
            let result = newton_raphson_forward(|x| x, 1.0, 0.0, bump, &config);
            assert!(matches!(result, Err(MathError::InvalidInput { .. })));
        }
    }

    proptest! {
        #[test]
        fn prop_square_root_residual_within_tolerance(target in 1.0f64..1.0e4) {
            let config = SolverConfig::default();
            let result = newton_raphson_forward(|x| x * x, target, 1.0, 1e-6, &config).unwrap();
            prop_assert!((result.root * result.root - target).abs() < config.tolerance);
        }
    }
}
