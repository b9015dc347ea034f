//! Status command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_metrics, print_warning, KeyValue};

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// Execute the status command.
pub fn execute(args: StatusArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let bond = args.bond.bond()?;
    let valuation = args.bond.valuation_date()?;

    let matured = bond.is_matured(valuation);
    if matured && !quiet && format == OutputFormat::Table {
        print_warning(&format!("Bond matured on {}", bond.maturity_date()));
    }

    let results = vec![
        KeyValue::new("Valuation Date", valuation.to_string()),
        KeyValue::new("Maturity", bond.maturity_date().to_string()),
        KeyValue::new("Matured", matured.to_string()),
        KeyValue::new("Days to Maturity", bond.days_to_maturity(valuation).to_string()),
    ];

    print_metrics("Maturity Status", &results, "Days to Maturity", format, quiet)
}
