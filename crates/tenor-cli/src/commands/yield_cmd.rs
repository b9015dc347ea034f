//! Yield command implementation.
//!
//! Solves for the periodic yield to maturity that reproduces a price.

use anyhow::Result;
use clap::Args;

use tenor_bonds::YieldSolver;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{format_percent, print_metrics, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Target price (same units as the face value)
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: f64,

    /// Absolute price tolerance
    #[arg(long, default_value = "0.0001")]
    pub tolerance: f64,

    /// Maximum Newton iterations
    #[arg(long, default_value = "1000")]
    pub max_iterations: u32,

    /// Starting rate
    #[arg(long, default_value = "0.05", allow_negative_numbers = true)]
    pub guess: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let bond = args.bond.bond()?;
    let valuation = args.bond.valuation_date()?;

    let solver = YieldSolver::new()
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations)
        .with_initial_guess(args.guess);
    let result = bond.yield_to_maturity_with(&solver, args.price, valuation)?;

    let results = vec![
        KeyValue::new("Valuation Date", valuation.to_string()),
        KeyValue::new("Maturity", bond.maturity_date().to_string()),
        KeyValue::from_amount("Price", args.price),
        KeyValue::from_rate("Yield to Maturity", result.yield_value),
        KeyValue::new("Yield (%)", format_percent(result.yield_value)),
        KeyValue::new("Iterations", result.iterations.to_string()),
        KeyValue::new("Residual", format!("{:.3e}", result.residual)),
    ];

    print_metrics("Yield to Maturity", &results, "Yield to Maturity", format, quiet)
}
