//! End-to-end tests of the `bopm` binary.

use std::fs;

use assert_cmd::Command;
use calamine::{open_workbook, Data, Reader, Xlsx};
use predicates::prelude::*;
use tempfile::tempdir;

fn bopm() -> Command {
    let mut cmd = Command::cargo_bin("bopm").unwrap();
    cmd.env_remove("BOPM_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn price_minimal_prints_value() {
    bopm()
        .args(["price", "--format", "minimal"])
        .assert()
        .success()
        .stdout("2.6661\n");
}

#[test]
fn price_table_shows_summary() {
    bopm()
        .arg("price")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1934"))
        .stdout(predicate::str::contains("Current payoff at time T0 = 2.6661"));
}

#[test]
fn price_json_has_full_precision_value() {
    let output = bopm()
        .args(["price", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let value = json["option_value"].as_f64().unwrap();
    assert!((value - 2.666_095_102_997_88).abs() < 1e-9);
    assert_eq!(json["params"]["option_type"], "call");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn price_with_contract_flags() {
    bopm()
        .args([
            "price",
            "--format",
            "minimal",
            "--periods",
            "1",
        ])
        .assert()
        .success()
        .stdout("2.9266\n");
}

#[test]
fn put_flags_are_case_insensitive() {
    bopm()
        .args([
            "price",
            "--format",
            "minimal",
            "--option-type",
            "PUT",
            "--exercise",
            "American",
        ])
        .assert()
        .success();
}

#[test]
fn unknown_option_type_rejected() {
    bopm()
        .args(["price", "--option-type", "straddle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option type"));
}

#[test]
fn periods_above_limit_rejected() {
    bopm()
        .args(["price", "--periods", "51"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("periods"));
}

#[test]
fn probability_outside_unit_interval_warns() {
    bopm()
        .args([
            "price",
            "--format",
            "minimal",
            "--rate",
            "2",
            "--volatility",
            "0.05",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("outside [0, 1]"));
}

#[test]
fn quiet_suppresses_warnings() {
    bopm()
        .args(["price", "--quiet", "--volatility", "0"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn tree_csv_lists_every_node() {
    let output = bopm()
        .args(["tree", "--format", "csv", "--periods", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("index,step,up_moves,price,payoff"));
    assert_eq!(lines.count(), 10);
}

#[test]
fn tree_single_step() {
    bopm()
        .args(["tree", "--format", "json", "--step", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"index\": 4"))
        .stdout(predicate::str::contains("\"index\": 1,").not());
}

#[test]
fn tree_step_beyond_maturity_fails() {
    bopm()
        .args(["tree", "--step", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beyond the last period"));
}

#[test]
fn graph_prints_dot() {
    let output = bopm().arg("graph").output().unwrap();
    assert!(output.status.success());

    let dot = String::from_utf8(output.stdout).unwrap();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("rankdir=\"LR\""));
    assert_eq!(dot.matches(" -> ").count(), 6);
    assert!(dot.contains("\"Price 1: 15.0000\\lPayoff 1: 2.6661\\l\" -> \"Price 2: 17.9005"));
}

#[test]
fn graph_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lattice.dot");

    bopm()
        .args(["graph", "--quiet", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn export_prints_csv_grid() {
    bopm()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("User inputs:,,,\n"))
        .stdout(predicate::str::contains("u,1.1934,,Up rate of the stock\n"))
        .stdout(predicate::str::contains("Price 1,15.0000,Payoff 1,2.6661\n"))
        .stdout(predicate::str::contains("Price 6,"));
}

#[test]
fn export_writes_xlsx_workbook() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("btree_details.xlsx");

    bopm()
        .args(["export", "--quiet", "--output"])
        .arg(&path)
        .assert()
        .success();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range("tree_vals").unwrap();
    assert_eq!(range.get_value((12, 0)), Some(&Data::String("u".to_string())));
    match range.get_value((18, 3)) {
        Some(Data::Float(value)) => assert!((value - 2.666_095_102_997_88).abs() < 1e-12),
        other => panic!("expected the option value in D19, got {other:?}"),
    }
}

#[test]
fn export_xlsx_requires_output_file() {
    bopm()
        .args(["export", "--sheet", "xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn config_init_then_use() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bopm.toml");

    bopm()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[contract]"));

    // A second init must not clobber the file.
    bopm()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fs::write(&path, "[contract]\nperiods = 1\n").unwrap();
    bopm()
        .args(["price", "--format", "minimal", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("2.9266\n");
}

#[test]
fn config_from_environment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bopm.toml");
    fs::write(&path, "[display]\nprecision = 2\n").unwrap();

    bopm()
        .env("BOPM_CONFIG", &path)
        .args(["price", "--format", "minimal"])
        .assert()
        .success()
        .stdout("2.67\n");
}

#[test]
fn config_show_json() {
    bopm()
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_periods\": 50"));
}

#[test]
fn missing_config_file_fails() {
    bopm()
        .args(["price", "--config", "/nonexistent/bopm.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access configuration file"));
}
