//! Bond terms files.
//!
//! A terms file is TOML with keys matching the bond fields. Every key is
//! optional; flags given on the command line take precedence.
//!
//! ```toml
//! coupon_rate = 0.05
//! face_value = 1000.0
//! maturity_date = "2030-06-15"
//! coupon_frequency = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use tenor_core::types::Date;

use crate::error::{CliError, CliResult};

/// Bond terms as read from a file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermsFile {
    pub coupon_rate: Option<f64>,
    pub face_value: Option<f64>,
    pub maturity_date: Option<Date>,
    pub coupon_frequency: Option<u32>,
}

impl TermsFile {
    /// Parses terms from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Loads terms from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let terms = Self::from_toml(&content)?;
        debug!("Loaded bond terms from {}", path.display());
        Ok(terms)
    }
}
