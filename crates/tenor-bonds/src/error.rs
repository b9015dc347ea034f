//! Error types for bond operations.

use thiserror::Error;

use tenor_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Yield calculation failed to converge.
    #[error("Yield to maturity calculation did not converge after {iterations} iterations (residual: {residual:.2e})")]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute pricing error at the last iterate.
        residual: f64,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] tenor_core::CoreError),

    /// Numerical error other than non-convergence.
    #[error("Math error: {0}")]
    Math(MathError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns true if this is a yield non-convergence error.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::YieldConvergenceFailed { .. })
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::YieldConvergenceFailed {
                iterations,
                residual,
            },
            other => Self::Math(other),
        }
    }
}
