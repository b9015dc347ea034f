//! Bond instrument types.
//!
//! - [`FixedBond`]: Fixed coupon bond with a regular coupon schedule
//! - [`FixedBondBuilder`]: Builder with required-field checks
//! - [`FixedBondTerms`]: Unvalidated terms as read from a file

mod fixed;

pub use fixed::{FixedBond, FixedBondBuilder, FixedBondTerms};
