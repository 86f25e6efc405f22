//! Integration tests for the smgres binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_params(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_valid_parameter_file_prints_summary() {
    let file = write_params(
        r#"
gravity_model = "propto_omega"
expansion_model = "lcdm"
"#,
    );

    let mut cmd = cargo_bin_cmd!("smgres");
    cmd.arg(file.path()).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Gravity model: propto_omega"))
        .stdout(predicate::str::contains("Expansion model: lcdm"));
}

#[test]
fn test_missing_gravity_model_exits_with_error() {
    let file = write_params("expansion_model = \"lcdm\"\n");

    let mut cmd = cargo_bin_cmd!("smgres");
    cmd.arg(file.path()).arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("gravity_model"));
}

#[test]
fn test_out_of_range_tuning_index_message_cites_both_numbers() {
    let file = write_params(
        r#"
gravity_model = "nkgb"
tuning_index_smg = 5
"#,
    );

    let mut cmd = cargo_bin_cmd!("smgres");
    cmd.arg(file.path()).arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("tuning_index_smg = 5"))
        .stderr(predicate::str::contains("number of entries 3"));
}

#[test]
fn test_json_output_has_config_and_precision() {
    let file = write_params(
        r#"
gravity_model = "brans_dicke"
"#,
    );

    let mut cmd = cargo_bin_cmd!("smgres");
    cmd.arg(file.path()).arg("--json").arg("--quiet");

    let assert = cmd.assert().success();
    let output = assert.get_output();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["gravity_model"], "brans_dicke");
    assert_eq!(json["config"]["qs_method"], "fully_dynamic");
    assert_eq!(json["precision"]["perturbations_sampling_stepsize"], 0.05);
}

#[test]
fn test_list_models_includes_catalog_entries() {
    let mut cmd = cargo_bin_cmd!("smgres");
    cmd.arg("--list-models");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("propto_omega"))
        .stdout(predicate::str::contains("brans_dicke"));
}

#[test]
fn test_input_is_required_without_list_models() {
    let mut cmd = cargo_bin_cmd!("smgres");
    cmd.assert().failure();
}
