//! # Tenor Core
//!
//! Core types and errors shared by the Tenor bond valuation crates.
//!
//! - **Types**: [`Date`] for valuation and maturity dates, [`CashFlow`] for
//!   scheduled payments
//! - **Errors**: [`CoreError`] for malformed dates and other input problems
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let maturity = Date::parse("2030-06-15").unwrap();
//! let valuation = Date::from_ymd(2025, 6, 15).unwrap();
//! assert_eq!(valuation.days_between(&maturity), 1826);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowType, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowType, Date};
