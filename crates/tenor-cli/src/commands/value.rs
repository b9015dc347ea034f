//! Value command implementation.
//!
//! Discounts the bond's schedule at a periodic rate, then solves for the
//! yield that reproduces the resulting present value.

use anyhow::Result;
use clap::Args;

use tenor_bonds::pricing::present_value;
use tenor_bonds::YieldSolver;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{format_percent, print_metrics, KeyValue};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Periodic discount rate as a decimal (0.03 for 3% per coupon period)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,
}

/// Execute the value command.
pub fn execute(args: ValueArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let bond = args.bond.bond()?;
    let valuation = args.bond.valuation_date()?;

    let amounts = bond.cash_flow_amounts(valuation);
    let pv = present_value(&amounts, args.rate);
    let ytm = YieldSolver::new().solve(&amounts, pv)?;

    let results = vec![
        KeyValue::new("Valuation Date", valuation.to_string()),
        KeyValue::new("Maturity", bond.maturity_date().to_string()),
        KeyValue::from_amount("Coupon Payment", bond.coupon_payment()),
        KeyValue::new("Cash Flows", amounts.len().to_string()),
        KeyValue::new("Discount Rate", format_percent(args.rate)),
        KeyValue::from_amount("Present Value", pv),
        KeyValue::from_rate("Yield to Maturity", ytm.yield_value),
        KeyValue::new("Iterations", ytm.iterations.to_string()),
    ];

    print_metrics("Bond Valuation", &results, "Present Value", format, quiet)
}
