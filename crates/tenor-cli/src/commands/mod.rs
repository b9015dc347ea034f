//! CLI command implementations.

pub mod schedule;
pub mod status;
pub mod value;
pub mod yield_cmd;

// Re-export submodules for convenience
pub use schedule::ScheduleArgs;
pub use status::StatusArgs;
pub use value::ValueArgs;
pub use yield_cmd::YieldArgs;

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use tenor_bonds::FixedBond;
use tenor_core::types::Date;

use crate::error::{CliError, CliResult};
use crate::terms::TermsFile;

/// Bond terms and valuation date shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct BondArgs {
    /// TOML file with bond terms; flags override its values
    #[arg(short, long, env = "TENOR_TERMS")]
    pub terms: Option<PathBuf>,

    /// Annual coupon rate as a decimal (0.05 for 5%)
    #[arg(short, long)]
    pub coupon_rate: Option<f64>,

    /// Face value (default: 100)
    #[arg(long)]
    pub face: Option<f64>,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: Option<String>,

    /// Coupon payments per year (default: 2)
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub valuation_date: Option<String>,
}

impl BondArgs {
    /// Builds the bond from the terms file and flags.
    pub fn bond(&self) -> anyhow::Result<FixedBond> {
        let file = match &self.terms {
            Some(path) => TermsFile::from_file(path)?,
            None => TermsFile::default(),
        };

        let coupon_rate = self
            .coupon_rate
            .or(file.coupon_rate)
            .ok_or_else(|| CliError::MissingArgument("--coupon-rate".into()))?;

        let maturity = match &self.maturity {
            Some(s) => parse_date(s)?,
            None => file
                .maturity_date
                .ok_or_else(|| CliError::MissingArgument("--maturity".into()))?,
        };

        let mut builder = FixedBond::builder()
            .coupon_rate(coupon_rate)
            .maturity_date(maturity);
        if let Some(face) = self.face.or(file.face_value) {
            builder = builder.face_value(face);
        }
        if let Some(frequency) = self.frequency.or(file.coupon_frequency) {
            builder = builder.coupon_frequency(frequency);
        }

        let bond = builder.build()?;
        debug!("Bond terms: {:?}", bond);
        Ok(bond)
    }

    /// Returns the valuation date, falling back to the local date.
    pub fn valuation_date(&self) -> CliResult<Date> {
        match &self.valuation_date {
            Some(s) => parse_date(s),
            None => Ok(Date::today()),
        }
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
