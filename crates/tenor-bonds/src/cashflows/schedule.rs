//! Coupon stepping from a valuation date towards maturity.
//!
//! Coupons are spaced a fixed `365 / frequency` days apart, starting at the
//! valuation date. The step keeps its fractional part (a semi-annual step is
//! 182.5 days), so the cursor is a date-time at microsecond resolution rather
//! than a whole date, and it is compared against midnight of the maturity
//! date.

use std::num::NonZeroU32;

use chrono::{Duration, NaiveDateTime};

use tenor_core::types::Date;

/// Days per year used to space coupons.
pub const DAYS_PER_YEAR: i64 = 365;

const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Returns the coupon spacing, `365 / frequency` days, rounded to the microsecond.
#[must_use]
pub fn coupon_step(frequency: NonZeroU32) -> Duration {
    let periods = i64::from(frequency.get());
    let year = DAYS_PER_YEAR * MICROS_PER_DAY;
    Duration::microseconds((year + periods / 2) / periods)
}

/// Iterator over the cursor dates at which coupons are scheduled.
///
/// Yields the date of each cursor position strictly before maturity. The
/// first item is the valuation date itself whenever it precedes maturity.
#[derive(Debug, Clone)]
pub struct CouponSteps {
    cursor: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
}

impl CouponSteps {
    /// Creates the stepping iterator for a bond paying `frequency` coupons a year.
    #[must_use]
    pub fn new(valuation_date: Date, maturity_date: Date, frequency: NonZeroU32) -> Self {
        Self {
            cursor: valuation_date.start_of_day(),
            end: maturity_date.start_of_day(),
            step: coupon_step(frequency),
        }
    }
}

impl Iterator for CouponSteps {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }

        let scheduled = Date::from(self.cursor.date());
        // Overflow means the cursor ran past the last representable instant,
        // which is already past maturity.
        self.cursor = self
            .cursor
            .checked_add_signed(self.step)
            .unwrap_or(self.end);
        Some(scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_coupon_step_keeps_fraction() {
        assert_eq!(coupon_step(freq(1)), Duration::days(365));
        assert_eq!(
            coupon_step(freq(2)),
            Duration::days(182) + Duration::hours(12)
        );
        assert_eq!(coupon_step(freq(4)).num_microseconds(), Some(7_884_000_000_000));
    }

    #[test]
    fn test_coupon_step_rounds_to_microsecond() {
        // 365 / 7 days = 4_505_142_857_142.857... microseconds
        assert_eq!(coupon_step(freq(7)).num_microseconds(), Some(4_505_142_857_143));
    }

    #[test]
    fn test_steps_before_maturity() {
        // 730 days at 182.5 days per step: cursor offsets 0, 182.5, 365, 547.5
        let steps: Vec<Date> =
            CouponSteps::new(date(2024, 1, 1), date(2025, 12, 31), freq(2)).collect();

        assert_eq!(
            steps,
            vec![
                date(2024, 1, 1),
                date(2024, 7, 1),
                date(2024, 12, 31),
                date(2025, 7, 2),
            ]
        );
    }

    #[test]
    fn test_fractional_steps_accumulate() {
        // Two half-day remainders make a whole day: 182.5 + 182.5 = 365
        let steps: Vec<Date> =
            CouponSteps::new(date(2025, 1, 1), date(2026, 1, 2), freq(2)).collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], date(2026, 1, 1));
    }

    #[test]
    fn test_no_steps_on_or_after_maturity() {
        let maturity = date(2025, 12, 31);
        assert_eq!(CouponSteps::new(maturity, maturity, freq(2)).count(), 0);
        assert_eq!(
            CouponSteps::new(date(2026, 10, 18), maturity, freq(2)).count(),
            0
        );
    }

    #[test]
    fn test_one_day_before_maturity() {
        let steps: Vec<Date> =
            CouponSteps::new(date(2025, 12, 30), date(2025, 12, 31), freq(12)).collect();
        assert_eq!(steps, vec![date(2025, 12, 30)]);
    }
}
