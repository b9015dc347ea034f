//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date for valuation and maturity
//! - [`CashFlow`]: A scheduled payment with its discount period

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowType};
pub use date::Date;
