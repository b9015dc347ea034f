//! Cash flow type for bond valuation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A scheduled cash flow.
///
/// `period` is the 1-based number of discount periods applied to the amount.
/// `schedule_date` is the date at which the schedule generated the flow.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{CashFlow, CashFlowType, Date};
///
/// let cf = CashFlow::coupon(1, Date::from_ymd(2025, 6, 15).unwrap(), 25.0);
/// assert_eq!(cf.amount(), 25.0);
/// assert_eq!(cf.cf_type(), CashFlowType::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Discount period (1-based)
    period: u32,
    /// Date the flow was scheduled on
    schedule_date: Date,
    /// Cash flow amount
    amount: f64,
    /// Type of cash flow
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(period: u32, schedule_date: Date, amount: f64, cf_type: CashFlowType) -> Self {
        Self {
            period,
            schedule_date,
            amount,
            cf_type,
        }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(period: u32, schedule_date: Date, amount: f64) -> Self {
        Self::new(period, schedule_date, amount, CashFlowType::Coupon)
    }

    /// Creates a final cash flow (coupon + principal).
    #[must_use]
    pub fn final_payment(period: u32, schedule_date: Date, coupon: f64, principal: f64) -> Self {
        Self::new(
            period,
            schedule_date,
            coupon + principal,
            CashFlowType::CouponAndPrincipal,
        )
    }

    /// Returns the discount period.
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Returns the schedule date.
    #[must_use]
    pub fn schedule_date(&self) -> Date {
        self.schedule_date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns true if this includes principal repayment.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(self.cf_type, CashFlowType::CouponAndPrincipal)
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}: {} ({})",
            self.period, self.schedule_date, self.amount, self.cf_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cashflow_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let cf = CashFlow::coupon(3, date, 2.5);

        assert_eq!(cf.period(), 3);
        assert_eq!(cf.schedule_date(), date);
        assert_relative_eq!(cf.amount(), 2.5);
        assert!(!cf.is_principal());
    }

    #[test]
    fn test_final_payment() {
        let date = Date::from_ymd(2030, 6, 15).unwrap();
        let cf = CashFlow::final_payment(10, date, 2.5, 100.0);

        assert_relative_eq!(cf.amount(), 102.5);
        assert_eq!(cf.cf_type(), CashFlowType::CouponAndPrincipal);
        assert!(cf.is_principal());
    }

    #[test]
    fn test_display() {
        let cf = CashFlow::final_payment(2, Date::from_ymd(2025, 12, 31).unwrap(), 0.0, 1000.0);
        assert_eq!(cf.to_string(), "#2 2025-12-31: 1000 (Coupon+Principal)");
    }
}
