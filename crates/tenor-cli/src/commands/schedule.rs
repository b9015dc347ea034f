//! Schedule command implementation.
//!
//! Lists the bond's cash flows as of the valuation date, optionally with
//! their discounted values at a periodic rate.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_bonds::pricing::discount_factor;
use tenor_core::types::CashFlow;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{format_amount, print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Periodic discount rate; adds discounted values when given
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

/// One row of the schedule.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Amount", display_with = "display_amount")]
    pub amount: f64,
    #[tabled(rename = "Present Value", display_with = "display_optional")]
    pub present_value: Option<f64>,
}

impl ScheduleRow {
    fn new(cf: &CashFlow, rate: Option<f64>) -> Self {
        Self {
            period: cf.period(),
            date: cf.schedule_date().to_string(),
            kind: cf.cf_type().to_string(),
            amount: cf.amount(),
            present_value: rate.map(|r| cf.amount() * discount_factor(r, cf.period())),
        }
    }
}

fn display_amount(value: &f64) -> String {
    format_amount(*value)
}

fn display_optional(value: &Option<f64>) -> String {
    value.map(format_amount).unwrap_or_default()
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let bond = args.bond.bond()?;
    let valuation = args.bond.valuation_date()?;

    let rows: Vec<ScheduleRow> = bond
        .cash_flows(valuation)
        .iter()
        .map(|cf| ScheduleRow::new(cf, args.rate))
        .collect();

    if format == OutputFormat::Table && !quiet {
        print_header(&format!(
            "Cash Flows ({} to {})",
            valuation,
            bond.maturity_date()
        ));
    }
    print_output(&rows, format)
}
