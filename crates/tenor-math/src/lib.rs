//! # Tenor Math
//!
//! Numerical utilities for the Tenor bond valuation library.
//!
//! - **Solvers**: Newton-Raphson root finding driven by a forward
//!   finite-difference derivative, as used by the yield-to-maturity solver

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{newton_raphson_forward, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
