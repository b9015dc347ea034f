//! Fixed coupon bond.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use tenor_core::types::{CashFlow, Date};

use crate::cashflows::CashFlowGenerator;
use crate::error::{BondError, BondResult};
use crate::pricing::{present_value, YieldResult, YieldSolver};

/// A fixed coupon bond.
///
/// Holds the four contractual terms and nothing else. Schedules, present
/// values and yields are recomputed from the terms and an explicit valuation
/// date on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FixedBondTerms")]
pub struct FixedBond {
    /// Coupon rate as decimal (0.05 = 5%).
    coupon_rate: f64,

    /// Redemption amount.
    face_value: f64,

    /// Maturity date.
    maturity_date: Date,

    /// Coupon payments per year.
    coupon_frequency: NonZeroU32,
}

/// Unvalidated bond terms, as read from a terms file.
///
/// Converting into [`FixedBond`] applies the same checks as
/// [`FixedBondBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedBondTerms {
    /// Coupon rate as decimal.
    pub coupon_rate: f64,
    /// Redemption amount.
    pub face_value: f64,
    /// Maturity date.
    pub maturity_date: Date,
    /// Coupon payments per year.
    pub coupon_frequency: u32,
}

impl TryFrom<FixedBondTerms> for FixedBond {
    type Error = BondError;

    fn try_from(terms: FixedBondTerms) -> BondResult<Self> {
        let coupon_frequency = validate_terms(
            terms.coupon_rate,
            terms.face_value,
            terms.coupon_frequency,
        )?;

        Ok(Self {
            coupon_rate: terms.coupon_rate,
            face_value: terms.face_value,
            maturity_date: terms.maturity_date,
            coupon_frequency,
        })
    }
}

impl From<&FixedBond> for FixedBondTerms {
    fn from(bond: &FixedBond) -> Self {
        Self {
            coupon_rate: bond.coupon_rate,
            face_value: bond.face_value,
            maturity_date: bond.maturity_date,
            coupon_frequency: bond.coupon_frequency.get(),
        }
    }
}

fn validate_terms(coupon_rate: f64, face_value: f64, frequency: u32) -> BondResult<NonZeroU32> {
    if !coupon_rate.is_finite() || coupon_rate < 0.0 {
        return Err(BondError::invalid_spec(format!(
            "Coupon rate must be a non-negative number, got {coupon_rate}"
        )));
    }
    if !face_value.is_finite() || face_value <= 0.0 {
        return Err(BondError::invalid_spec(format!(
            "Face value must be positive, got {face_value}"
        )));
    }
    NonZeroU32::new(frequency)
        .ok_or_else(|| BondError::invalid_spec("Coupon frequency must be at least 1"))
}

impl FixedBond {
    /// Creates a bond from its terms, parsing `maturity_date` as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// `BondError::Core` if the maturity date is malformed, `BondError::InvalidSpec`
    /// for a negative coupon rate, a non-positive face value or a zero frequency.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenor_bonds::FixedBond;
    ///
    /// let bond = FixedBond::new(0.05, 1000.0, "2030-06-15", 2).unwrap();
    /// assert_eq!(bond.coupon_payment(), 25.0);
    /// ```
    pub fn new(
        coupon_rate: f64,
        face_value: f64,
        maturity_date: &str,
        coupon_frequency: u32,
    ) -> BondResult<Self> {
        FixedBondTerms {
            coupon_rate,
            face_value,
            maturity_date: Date::parse(maturity_date)?,
            coupon_frequency,
        }
        .try_into()
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> FixedBondBuilder {
        FixedBondBuilder::new()
    }

    /// Returns the coupon rate as a decimal.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the number of coupon payments per year.
    #[must_use]
    pub fn coupon_frequency(&self) -> u32 {
        self.coupon_frequency.get()
    }

    /// Returns the coupon frequency in its validated form.
    #[must_use]
    pub fn frequency(&self) -> NonZeroU32 {
        self.coupon_frequency
    }

    /// Returns the annual coupon amount.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.face_value * self.coupon_rate
    }

    /// Returns the coupon amount per period.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.annual_coupon() / f64::from(self.coupon_frequency.get())
    }

    /// Returns the cash flow schedule as seen from `valuation_date`.
    #[must_use]
    pub fn cash_flows(&self, valuation_date: Date) -> Vec<CashFlow> {
        CashFlowGenerator::generate(self, valuation_date)
    }

    /// Returns the cash flow amounts as seen from `valuation_date`.
    #[must_use]
    pub fn cash_flow_amounts(&self, valuation_date: Date) -> Vec<f64> {
        CashFlowGenerator::amounts(self, valuation_date)
    }

    /// Present value of the schedule at a periodic `discount_rate`.
    ///
    /// See [`present_value`] for the discounting convention.
    #[must_use]
    pub fn present_value(&self, discount_rate: f64, valuation_date: Date) -> f64 {
        present_value(&self.cash_flow_amounts(valuation_date), discount_rate)
    }

    /// Yield to maturity reproducing `target_price`, with default solver settings.
    ///
    /// # Errors
    ///
    /// `BondError::YieldConvergenceFailed` if the solver does not converge.
    pub fn yield_to_maturity(
        &self,
        target_price: f64,
        valuation_date: Date,
    ) -> BondResult<YieldResult> {
        self.yield_to_maturity_with(&YieldSolver::new(), target_price, valuation_date)
    }

    /// Yield to maturity reproducing `target_price` with a configured solver.
    ///
    /// The schedule is generated once; only discounting is repeated per
    /// iteration.
    ///
    /// # Errors
    ///
    /// `BondError::YieldConvergenceFailed` if the solver does not converge.
    pub fn yield_to_maturity_with(
        &self,
        solver: &YieldSolver,
        target_price: f64,
        valuation_date: Date,
    ) -> BondResult<YieldResult> {
        solver.solve(&self.cash_flow_amounts(valuation_date), target_price)
    }

    /// Returns true once `valuation_date` has reached the maturity date.
    #[must_use]
    pub fn is_matured(&self, valuation_date: Date) -> bool {
        valuation_date >= self.maturity_date
    }

    /// Signed whole days from `valuation_date` to maturity; negative once matured.
    #[must_use]
    pub fn days_to_maturity(&self, valuation_date: Date) -> i64 {
        valuation_date.days_between(&self.maturity_date)
    }

    /// [`FixedBond::cash_flows`] as of the local date.
    #[must_use]
    pub fn cash_flows_today(&self) -> Vec<CashFlow> {
        self.cash_flows(Date::today())
    }

    /// [`FixedBond::present_value`] as of the local date.
    #[must_use]
    pub fn present_value_today(&self, discount_rate: f64) -> f64 {
        self.present_value(discount_rate, Date::today())
    }

    /// [`FixedBond::yield_to_maturity`] as of the local date.
    ///
    /// # Errors
    ///
    /// `BondError::YieldConvergenceFailed` if the solver does not converge.
    pub fn yield_to_maturity_today(&self, target_price: f64) -> BondResult<YieldResult> {
        self.yield_to_maturity(target_price, Date::today())
    }

    /// [`FixedBond::is_matured`] as of the local date.
    #[must_use]
    pub fn is_matured_today(&self) -> bool {
        self.is_matured(Date::today())
    }

    /// [`FixedBond::days_to_maturity`] as of the local date.
    #[must_use]
    pub fn days_to_maturity_today(&self) -> i64 {
        self.days_to_maturity(Date::today())
    }
}

/// Builder for fixed coupon bonds.
///
/// Coupon rate and maturity are required. Face value defaults to 100 and
/// frequency to semi-annual.
#[derive(Debug, Clone)]
pub struct FixedBondBuilder {
    coupon_rate: Option<f64>,
    maturity_date: Option<Date>,
    face_value: f64,
    coupon_frequency: u32,
}

impl Default for FixedBondBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedBondBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coupon_rate: None,
            maturity_date: None,
            face_value: 100.0,
            coupon_frequency: 2,
        }
    }

    /// Sets the coupon rate (as decimal, 0.05 = 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: f64) -> Self {
        self.face_value = value;
        self
    }

    /// Sets the number of coupon payments per year.
    #[must_use]
    pub fn coupon_frequency(mut self, frequency: u32) -> Self {
        self.coupon_frequency = frequency;
        self
    }

    /// Builds the fixed bond.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the terms are invalid.
    pub fn build(self) -> BondResult<FixedBond> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?;

        FixedBondTerms {
            coupon_rate,
            face_value: self.face_value,
            maturity_date,
            coupon_frequency: self.coupon_frequency,
        }
        .try_into()
    }
}
