//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ScheduleArgs, StatusArgs, ValueArgs, YieldArgs};

/// Tenor - Fixed coupon bond valuation CLI
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Present value at a discount rate, and the yield recovered from it
    Value(ValueArgs),

    /// Yield to maturity reproducing a price
    Yield(YieldArgs),

    /// Cash flow schedule as of the valuation date
    Schedule(ScheduleArgs),

    /// Matured flag and days to maturity
    Status(StatusArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
