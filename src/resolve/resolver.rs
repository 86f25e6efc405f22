//! Configuration resolution.
//!
//! Turns the raw key/value store into a validated [`ResolvedConfig`]:
//! aliases are resolved, defaults layered, the model registry consulted
//! and cross-field consistency enforced. Every fatal condition aborts
//! resolution; no partial configuration is ever handed to the solver.

use super::alias::{resolve_ordered, resolve_yes_no};
use super::shooting;
use super::types::{PertInitialConditions, QsMethod, ResolvedConfig};
use crate::error::{Error, Result};
use crate::keystore::KeyStore;
use crate::precision::Precision;
use crate::registry::ModelRegistry;
use tracing::{debug, info};

/// Resolve the modified-gravity configuration.
///
/// `precision` starts from the solver defaults; individual fields are
/// overwritten when the corresponding key is present. Layering is pure
/// default-then-override, so the final state depends only on which keys
/// exist, never on read order.
pub fn resolve(
    keystore: &KeyStore,
    registry: &ModelRegistry,
    precision: &mut Precision,
) -> Result<ResolvedConfig> {
    let mut config = ResolvedConfig {
        // Invoking this resolver is itself the enable switch.
        has_modified_gravity: true,
        ..ResolvedConfig::default()
    };

    if let Some(raw) = keystore.get_str("method_qs_smg")
        && let Some(method) = resolve_ordered(raw, QsMethod::ALIAS_TABLE)
    {
        config.qs_method = method;
    }

    if let Some(raw) = keystore.get_str("use_pert_var_deltaphi_smg") {
        config.use_delta_phi = resolve_yes_no(raw);
    }

    // Tuning overrides. Presence matters beyond the value: models apply
    // their own defaults only when the user supplied nothing.
    // A negative index can never address the vector; map it to a value
    // the bounds check is guaranteed to reject.
    let tuning_index_override = keystore
        .get_int("tuning_index_smg")
        .map(|v| usize::try_from(v).unwrap_or(usize::MAX));
    if let Some(index) = tuning_index_override {
        config.tuning_index = index;
    }
    let dxdy_guess_override = keystore.get_f64("tuning_dxdy_guess_smg");
    if let Some(guess) = dxdy_guess_override {
        config.tuning_dxdy_guess = guess;
    }

    let gravity_model =
        keystore
            .get_str("gravity_model")
            .ok_or_else(|| Error::MissingRequiredKey {
                key: "gravity_model".to_string(),
            })?;
    config.gravity_model = gravity_model.to_string();

    let props = registry.gravity_properties(
        gravity_model,
        tuning_index_override.is_some(),
        dxdy_guess_override.is_some(),
    )?;
    config.field_evolution = props.field_evolution;
    config.m2_evolution = props.m2_evolution;
    config.rho_evolution = props.rho_evolution;
    config.parameters = props.parameters;
    if let Some(index) = props.tuning_index {
        config.tuning_index = index;
    }
    if let Some(guess) = props.dxdy_guess {
        config.tuning_dxdy_guess = guess;
    }

    if !config.field_evolution {
        // No self-consistent evolution: a parameterized expansion
        // history is mandatory, and delta-phi has nothing to evolve.
        if config.use_delta_phi {
            return Err(Error::InconsistentConfiguration {
                message: format!(
                    "it is not consistent to evolve delta_phi_smg with the parametrized model '{gravity_model}'"
                ),
            });
        }

        let expansion_model =
            keystore
                .get_str("expansion_model")
                .ok_or_else(|| Error::MissingRequiredKey {
                    key: "expansion_model".to_string(),
                })?;
        let expansion = registry.expansion_properties(expansion_model)?;
        config.rho_evolution = expansion.rho_evolution;
        config.expansion_model = Some(expansion_model.to_string());
    }

    read_threshold_overrides(keystore, &mut config, precision);

    if let Some(raw) = keystore.get_str("skip_stability_tests_smg") {
        config.skip_stability_tests = resolve_yes_no(raw);
    }

    if let Some(raw) = keystore.get_str("get_h_from_trace") {
        config.get_h_from_trace = resolve_yes_no(raw);
    }

    if let Some(raw) = keystore.get_str("pert_initial_conditions_smg")
        && let Some(ic) = PertInitialConditions::from_exact(raw)
    {
        config.pert_initial_conditions = ic;
    }

    if let Some(omega_debug) = keystore.get_f64("omega_smg_debug") {
        config.omega_debug_mode = omega_debug != 0.0;
    }

    shooting::finalize(keystore, &mut config)?;

    if let Some(verbosity) = keystore.get_f64("output_background_smg") {
        config.output_background_verbosity = verbosity;
    }

    info!(
        gravity_model = %config.gravity_model,
        expansion_model = config.expansion_model.as_deref().unwrap_or("-"),
        qs_method = %config.qs_method,
        tuning_index = config.tuning_index,
        "resolved modified-gravity configuration"
    );

    Ok(config)
}

/// Apply the optional safety-threshold and precision overrides.
///
/// A declarative (key, target) table keeps the layering uniform and
/// order-independent.
fn read_threshold_overrides(
    keystore: &KeyStore,
    config: &mut ResolvedConfig,
    precision: &mut Precision,
) {
    let overrides: [(&str, &mut f64); 11] = [
        ("cs2_safe_smg", &mut config.cs2_safe),
        ("D_safe_smg", &mut config.d_safe),
        ("ct2_safe_smg", &mut config.ct2_safe),
        ("M2_safe_smg", &mut config.m2_safe),
        ("kineticity_safe_smg", &mut config.kineticity_safe),
        (
            "a_min_stability_test_smg",
            &mut config.a_min_stability_test,
        ),
        ("pert_ic_tolerance_smg", &mut precision.pert_ic_tolerance),
        ("pert_ic_ini_z_ref_smg", &mut precision.pert_ic_ini_z_ref),
        ("pert_ic_regulator_smg", &mut precision.pert_ic_regulator),
        (
            "pert_qs_ic_tolerance_test_smg",
            &mut precision.pert_qs_ic_tolerance_test,
        ),
        ("min_a_pert_smg", &mut precision.min_a_pert),
    ];

    for (key, target) in overrides {
        if let Some(value) = keystore.get_f64(key) {
            debug!(key, value, "threshold override");
            *target = value;
        }
    }
}
