//! # Tenor Bonds
//!
//! Fixed coupon bond valuation for the Tenor library.
//!
//! This crate provides:
//!
//! - **Instruments**: [`FixedBond`] and its builder
//! - **Cash Flows**: Coupon schedule generation from a valuation date
//! - **Pricing**: Present value and Newton-Raphson yield-to-maturity
//! - **Maturity**: Matured flag and signed days to maturity
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let bond = FixedBond::new(0.0, 1000.0, "2025-12-31", 2).unwrap();
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//!
//! let pv = bond.present_value(0.06, valuation);
//! assert!(pv < 1000.0);
//!
//! let ytm = bond.yield_to_maturity(pv, valuation).unwrap();
//! assert!((ytm.yield_value - 0.06).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{CashFlowGenerator, CouponSteps};

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{FixedBond, FixedBondBuilder, FixedBondTerms};

    // Pricing
    pub use crate::pricing::{present_value, YieldResult, YieldSolver};

    // Core types
    pub use tenor_core::types::{CashFlow, CashFlowType, Date};
}

pub use error::{BondError, BondResult};
pub use instruments::{FixedBond, FixedBondBuilder, FixedBondTerms};
pub use pricing::{YieldResult, YieldSolver};
