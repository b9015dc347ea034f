//! Cash flow generation for bonds.

mod schedule;

pub use schedule::{coupon_step, CouponSteps, DAYS_PER_YEAR};

use log::debug;

use tenor_core::types::{CashFlow, Date};

use crate::instruments::FixedBond;

/// Generates cash flows for bonds.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Generates the cash flow schedule of a fixed bond as seen from `valuation_date`.
    ///
    /// One coupon is scheduled at every cursor step strictly before maturity,
    /// followed by a single final payment of coupon plus face value. A bond
    /// valued on or after its maturity date therefore has exactly one flow.
    ///
    /// Flow `i` (zero-based) carries discount period `i + 1`.
    #[must_use]
    pub fn generate(bond: &FixedBond, valuation_date: Date) -> Vec<CashFlow> {
        let coupon = bond.coupon_payment();
        let maturity = bond.maturity_date();

        let mut flows: Vec<CashFlow> = CouponSteps::new(
            valuation_date,
            maturity,
            bond.frequency(),
        )
        .zip(1u32..)
        .map(|(date, period)| CashFlow::coupon(period, date, coupon))
        .collect();

        let final_period = u32::try_from(flows.len() + 1).unwrap_or(u32::MAX);
        flows.push(CashFlow::final_payment(
            final_period,
            maturity,
            coupon,
            bond.face_value(),
        ));

        debug!(
            "Generated {} cash flows from {} to maturity {}",
            flows.len(),
            valuation_date,
            maturity
        );
        flows
    }

    /// Generates only the cash flow amounts, in payment order.
    #[must_use]
    pub fn amounts(bond: &FixedBond, valuation_date: Date) -> Vec<f64> {
        Self::generate(bond, valuation_date)
            .iter()
            .map(CashFlow::amount)
            .collect()
    }
}
