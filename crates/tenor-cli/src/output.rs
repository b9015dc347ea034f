//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a list of metrics.
///
/// JSON output is a single object keyed by metric name. Minimal output prints
/// only the value of `primary`.
pub fn print_metrics(
    title: &str,
    metrics: &[KeyValue],
    primary: &str,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(title);
            }
            print_table(metrics)
        }
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = metrics
                .iter()
                .map(|m| (m.key.clone(), serde_json::Value::String(m.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
            Ok(())
        }
        OutputFormat::Csv => print_csv(metrics),
        OutputFormat::Minimal => {
            if let Some(m) = metrics.iter().find(|m| m.key == primary) {
                println!("{}", m.value);
            }
            Ok(())
        }
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (one record per line).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Formats a periodic rate as a percentage string.
pub fn format_percent(value: f64) -> String {
    format!("{:.4}%", value * 100.0)
}

/// Formats a monetary amount.
pub fn format_amount(value: f64) -> String {
    format!("{:.6}", value)
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from an amount.
    pub fn from_amount(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_amount(value))
    }

    /// Creates a key-value pair from a rate, keeping full precision.
    pub fn from_rate(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{:.8}", value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        assert_eq!(format_percent(0.0525), "5.2500%");
        assert_eq!(format_amount(747.258_172_8), "747.258173");
        assert_eq!(KeyValue::from_rate("Yield", 0.06).value, "0.06000000");
    }
}
