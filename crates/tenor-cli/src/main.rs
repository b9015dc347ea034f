//! Tenor CLI - Command-line interface for fixed coupon bond valuation.
//!
//! # Usage
//!
//! ```bash
//! # Present value at a periodic rate, and the yield recovered from it
//! tenor value --coupon-rate 0 --face 1000 --maturity 2025-12-31 --rate 0.06
//!
//! # Yield to maturity from a price
//! tenor yield --coupon-rate 0.05 --face 1000 --maturity 2030-06-15 --price 985.5
//!
//! # Cash flow schedule, with terms read from a file
//! tenor schedule --terms bond.toml --valuation-date 2026-01-15
//!
//! # Matured flag and days to maturity
//! tenor status --terms bond.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;
mod terms;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Library crates log through `log`; the subscriber picks those records up too.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Value(args) => commands::value::execute(args, format, quiet)?,
        Commands::Yield(args) => commands::yield_cmd::execute(args, format, quiet)?,
        Commands::Schedule(args) => commands::schedule::execute(args, format, quiet)?,
        Commands::Status(args) => commands::status::execute(args, format, quiet)?,
    }

    Ok(())
}
