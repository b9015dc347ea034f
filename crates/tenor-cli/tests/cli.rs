//! Integration tests for the `tenor` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const ZERO_COUPON: [&str; 10] = [
    "--coupon-rate",
    "0",
    "--face",
    "1000",
    "--maturity",
    "2025-12-31",
    "--frequency",
    "2",
    "--valuation-date",
    "2024-01-01",
];

fn tenor() -> Command {
    let mut cmd = Command::cargo_bin("tenor").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TENOR_TERMS");
    cmd
}

fn json_metric(output: &[u8], key: &str) -> String {
    let value: serde_json::Value = serde_json::from_slice(output).unwrap();
    value[key].as_str().unwrap().to_string()
}

#[test]
fn value_minimal_prints_present_value() {
    tenor()
        .args(["--format", "minimal", "value", "--rate", "0.06"])
        .args(ZERO_COUPON)
        .assert()
        .success()
        .stdout("747.258173\n");
}

#[test]
fn value_recovers_rate() {
    let output = tenor()
        .args(["--format", "json", "value", "--rate", "0.06"])
        .args(ZERO_COUPON)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_metric(&output.stdout, "Cash Flows"), "5");

    let ytm: f64 = json_metric(&output.stdout, "Yield to Maturity").parse().unwrap();
    assert!((ytm - 0.06).abs() < 1e-4);
}

#[test]
fn yield_from_price() {
    let output = tenor()
        .args(["--format", "json", "yield", "--price", "747.258173"])
        .args(ZERO_COUPON)
        .output()
        .unwrap();

    assert!(output.status.success());
    let ytm: f64 = json_metric(&output.stdout, "Yield to Maturity").parse().unwrap();
    assert!((ytm - 0.06).abs() < 1e-4);
}

#[test]
fn yield_iteration_budget_exhausted() {
    tenor()
        .args(["yield", "--price", "500", "--max-iterations", "1"])
        .args(ZERO_COUPON)
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not converge"));
}

#[test]
fn schedule_csv() {
    tenor()
        .args(["--format", "csv", "schedule"])
        .args(ZERO_COUPON)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "period,date,kind,amount,present_value\n1,2024-01-01,Coupon,0.0,\n",
        ))
        .stdout(predicate::str::contains("5,2025-12-31,Coupon+Principal,1000.0,"));
}

#[test]
fn schedule_table_with_rate() {
    tenor()
        .args(["schedule", "--rate", "0.06"])
        .args(ZERO_COUPON)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-07-02"))
        .stdout(predicate::str::contains("747.258173"));
}

#[test]
fn status_of_matured_bond() {
    tenor()
        .args(["--format", "json", "status"])
        .args(["--coupon-rate", "0.05", "--maturity", "2025-12-31"])
        .args(["--valuation-date", "2026-10-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Matured\": \"true\""))
        .stdout(predicate::str::contains("\"Days to Maturity\": \"-291\""));
}

#[test]
fn status_minimal_days() {
    tenor()
        .args(["-f", "minimal", "status"])
        .args(ZERO_COUPON)
        .assert()
        .success()
        .stdout("730\n");
}

#[test]
fn terms_file_with_flag_override() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "coupon_rate = 0.05\nface_value = 1000.0\nmaturity_date = \"2025-12-31\"\ncoupon_frequency = 2"
    )
    .unwrap();

    // Terms file alone: 5% semi-annual prices at par for a 2.5% periodic rate.
    tenor()
        .args(["-f", "minimal", "value", "--rate", "0.025", "--valuation-date", "2024-01-01"])
        .arg("--terms")
        .arg(file.path())
        .assert()
        .success()
        .stdout("1000.000000\n");

    // A flag overrides the file.
    tenor()
        .args(["-f", "minimal", "value", "--rate", "0.06", "--valuation-date", "2024-01-01"])
        .args(["--coupon-rate", "0"])
        .arg("--terms")
        .arg(file.path())
        .assert()
        .success()
        .stdout("747.258173\n");
}

#[test]
fn invalid_terms_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "coupon = 5.0").unwrap();

    tenor()
        .args(["status", "--terms"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn invalid_date_rejected() {
    tenor()
        .args(["status", "--coupon-rate", "0.05", "--maturity", "2025-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn missing_maturity_rejected() {
    tenor()
        .args(["status", "--coupon-rate", "0.05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--maturity"));
}

#[test]
fn zero_frequency_rejected() {
    tenor()
        .args(["status", "--coupon-rate", "0.05", "--maturity", "2030-01-01"])
        .args(["--frequency", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Coupon frequency must be at least 1"));
}
