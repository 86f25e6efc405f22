//! End-to-end resolution tests against the built-in model catalog.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use smgres::registry::ModelRegistry;
use smgres::resolve::{PertInitialConditions, QsMethod};
use smgres::{Error, check_parameter_file};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_params(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_parameterized_model_full_resolution() {
    let file = write_params(
        r#"
gravity_model = "propto_omega"
expansion_model = "lcdm"
method_qs_smg = "automatic"
cs2_safe_smg = 1e-4
skip_stability_tests_smg = "yes"
pert_initial_conditions_smg = "single_clock"
"#,
    );

    let registry = ModelRegistry::builtin();
    let (config, precision) = check_parameter_file(file.path(), &registry, 0).unwrap();

    assert!(config.has_modified_gravity);
    assert!(!config.field_evolution);
    assert_eq!(config.expansion_model.as_deref(), Some("lcdm"));
    assert_eq!(config.qs_method, QsMethod::Automatic);
    assert_eq!(config.cs2_safe, 1e-4);
    assert!(config.skip_stability_tests);
    assert_eq!(
        config.pert_initial_conditions,
        PertInitialConditions::SingleClock
    );
    // The post-pass caps the default stepsize of 0.1.
    assert_eq!(precision.perturbations_sampling_stepsize, 0.05);
}

#[test]
fn test_self_evolving_model_needs_no_expansion_history() {
    let file = write_params(
        r#"
gravity_model = "brans_dicke"
use_pert_var_deltaphi_smg = "y"
"#,
    );

    let registry = ModelRegistry::builtin();
    let (config, _) = check_parameter_file(file.path(), &registry, 0).unwrap();

    assert!(config.field_evolution);
    assert!(config.use_delta_phi);
    assert_eq!(config.expansion_model, None);
    // brans_dicke declares its own tuning defaults.
    assert_eq!(config.tuning_index, 2);
    assert_eq!(config.tuning_dxdy_guess, 0.5);
}

#[test]
fn test_user_tuning_overrides_suppress_model_defaults() {
    let file = write_params(
        r#"
gravity_model = "brans_dicke"
tuning_index_smg = 0
tuning_dxdy_guess_smg = 3.0
"#,
    );

    let registry = ModelRegistry::builtin();
    let (config, _) = check_parameter_file(file.path(), &registry, 0).unwrap();

    assert_eq!(config.tuning_index, 0);
    assert_eq!(config.tuning_dxdy_guess, 3.0);
}

#[test]
fn test_shooting_parameter_pins_starting_point() {
    let file = write_params(
        r#"
gravity_model = "propto_omega"
expansion_model = "lcdm"
tuning_index_smg = 1
shooting_parameter_smg = 2.5
"#,
    );

    let registry = ModelRegistry::builtin();
    let (config, _) = check_parameter_file(file.path(), &registry, 0).unwrap();

    assert_eq!(config.parameters[1], 2.5);
    // Other entries keep the catalog defaults.
    assert_eq!(config.parameters[0], 1.0);
}

#[test]
fn test_tuning_handle_drives_later_updates() {
    let file = write_params(
        r#"
gravity_model = "propto_omega"
expansion_model = "lcdm"
"#,
    );

    let registry = ModelRegistry::builtin();
    let (mut config, _) = check_parameter_file(file.path(), &registry, 0).unwrap();

    let mut handle = config.tuning_handle().unwrap();
    let index = handle.index();
    handle.set(handle.get() + 0.125);
    assert_eq!(config.parameters[index], 1.125);
}

#[test]
fn test_missing_gravity_model_fails() {
    let file = write_params("expansion_model = \"lcdm\"\n");
    let registry = ModelRegistry::builtin();

    let err = check_parameter_file(file.path(), &registry, 0).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredKey { ref key } if key == "gravity_model"));
}

#[test]
fn test_out_of_range_tuning_index_cites_index_and_size() {
    let file = write_params(
        r#"
gravity_model = "nkgb"
tuning_index_smg = 5
"#,
    );
    let registry = ModelRegistry::builtin();

    let err = check_parameter_file(file.path(), &registry, 0).unwrap_err();
    match err {
        Error::TuningIndexOutOfRange { index, size } => {
            assert_eq!(index, 5);
            assert_eq!(size, 3);
        }
        other => panic!("expected TuningIndexOutOfRange, got {other:?}"),
    }
    let message = format!(
        "{}",
        Error::TuningIndexOutOfRange { index: 5, size: 3 }
    );
    assert!(message.contains('5') && message.contains('3'));
}

#[test]
fn test_unknown_model_names_propagate() {
    let registry = ModelRegistry::builtin();

    let file = write_params("gravity_model = \"tevess\"\n");
    let err = check_parameter_file(file.path(), &registry, 0).unwrap_err();
    assert!(matches!(err, Error::UnknownModel { kind: "gravity", .. }));

    let file = write_params(
        r#"
gravity_model = "propto_scale"
expansion_model = "w_constant"
"#,
    );
    let err = check_parameter_file(file.path(), &registry, 0).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownModel {
            kind: "expansion",
            ..
        }
    ));
}

#[test]
fn test_rho_evolution_follows_expansion_history() {
    let file = write_params(
        r#"
gravity_model = "constant_alphas"
expansion_model = "rho_de"
"#,
    );

    let registry = ModelRegistry::builtin();
    let (config, _) = check_parameter_file(file.path(), &registry, 0).unwrap();
    assert!(config.rho_evolution);
}

#[test]
fn test_small_stepsize_survives_the_post_pass() {
    use smgres::keystore::KeyStore;
    use smgres::precision::{Precision, adjust};

    let mut keystore = KeyStore::new();
    keystore.set("gravity_model", "propto_omega");
    keystore.set("expansion_model", "lcdm");

    let mut precision = Precision {
        perturbations_sampling_stepsize: 0.03,
        ..Precision::default()
    };
    let registry = ModelRegistry::builtin();
    smgres::resolve::resolve(&keystore, &registry, &mut precision).unwrap();
    adjust(&mut precision);
    assert_eq!(precision.perturbations_sampling_stepsize, 0.03);
}
