//! Values a two-year zero coupon bond and recovers its yield.
//!
//! Run with: cargo run -p tenor-bonds --example zero_coupon

use tenor_bonds::prelude::*;

fn main() -> BondResult<()> {
    let bond = FixedBond::new(0.0, 1000.0, "2025-12-31", 2)?;
    let valuation = Date::from_ymd(2024, 1, 1)?;

    println!("Cash flows as of {valuation}:");
    for cf in bond.cash_flows(valuation) {
        println!("  {cf}");
    }

    let pv = bond.present_value(0.06, valuation);
    println!("Present value at 6%: {pv:.4}");

    let ytm = bond.yield_to_maturity(pv, valuation)?;
    println!(
        "Yield to maturity: {:.6} ({} iterations)",
        ytm.yield_value, ytm.iterations
    );

    println!(
        "Matured: {}, days to maturity: {}",
        bond.is_matured(valuation),
        bond.days_to_maturity(valuation)
    );
    Ok(())
}
