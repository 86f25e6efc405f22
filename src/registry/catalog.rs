//! Built-in catalog of gravity and expansion models.

use super::ModelRegistry;
use super::types::{ExpansionModelSpec, GravityModelSpec};

/// Shorthand for a parameterized (alpha-based) gravity model that does
/// not evolve its own background.
fn parameterized(params: Vec<f64>) -> GravityModelSpec {
    GravityModelSpec {
        field_evolution: false,
        m2_evolution: false,
        rho_evolution: false,
        default_parameters: params,
        default_tuning_index: 0,
        default_dxdy_guess: None,
    }
}

/// Populate `registry` with the built-in model catalog.
pub fn register_builtin(registry: &mut ModelRegistry) {
    // Parameterized models: alphas follow a prescribed function of the
    // background; parameters are the proportionality coefficients plus
    // the initial Planck mass.
    registry.register_gravity(
        "propto_omega",
        parameterized(vec![1.0, 0.0, 0.0, 0.0, 1.0]),
    );
    registry.register_gravity(
        "propto_scale",
        parameterized(vec![1.0, 0.0, 0.0, 0.0, 1.0]),
    );
    registry.register_gravity(
        "constant_alphas",
        parameterized(vec![1.0, 0.0, 0.0, 0.0, 1.0]),
    );
    registry.register_gravity(
        "eft_alphas_power_law",
        parameterized(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
    );
    registry.register_gravity(
        "eft_gammas_power_law",
        parameterized(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
    );
    registry.register_gravity(
        "eft_gammas_exponential",
        parameterized(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
    );

    // Self-evolving models: the scalar field equations are integrated,
    // no expansion parameterization is read for these.
    registry.register_gravity(
        "quintessence_monomial",
        GravityModelSpec {
            field_evolution: true,
            m2_evolution: false,
            rho_evolution: false,
            // N, V0, phi_prime_ini, phi_ini
            default_parameters: vec![2.0, 1e-7, 0.0, 5.0],
            default_tuning_index: 1,
            default_dxdy_guess: Some(1e-7),
        },
    );
    registry.register_gravity(
        "quintessence_tracker",
        GravityModelSpec {
            field_evolution: true,
            m2_evolution: false,
            rho_evolution: false,
            // K_ini, P_ini, V0, n, m, lambda
            default_parameters: vec![1e-14, 1e-14, 1e-7, 2.0, 3.0, 1.0],
            default_tuning_index: 2,
            default_dxdy_guess: Some(1e-7),
        },
    );
    registry.register_gravity(
        "alpha_attractor_canonical",
        GravityModelSpec {
            field_evolution: true,
            m2_evolution: false,
            rho_evolution: false,
            // phi_prime_ini, f_ini, alpha, c2, p, n
            default_parameters: vec![0.0, 1.0, 1.0, 1e-7, 2.0, 2.0],
            default_tuning_index: 3,
            default_dxdy_guess: Some(1e-7),
        },
    );
    registry.register_gravity(
        "galileon",
        GravityModelSpec {
            field_evolution: true,
            m2_evolution: false,
            rho_evolution: false,
            // xi_ini, c1..c5, phi_ini
            default_parameters: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            default_tuning_index: 3,
            default_dxdy_guess: None,
        },
    );
    registry.register_gravity(
        "brans_dicke",
        GravityModelSpec {
            field_evolution: true,
            m2_evolution: false,
            rho_evolution: false,
            // Omega_smg, w_BD, phi_ini, phi_prime_ini
            default_parameters: vec![0.7, 50.0, 1.0, 0.0],
            default_tuning_index: 2,
            default_dxdy_guess: Some(0.5),
        },
    );
    registry.register_gravity(
        "nkgb",
        GravityModelSpec {
            field_evolution: true,
            m2_evolution: false,
            rho_evolution: false,
            // g, n, xi0
            default_parameters: vec![1.0, 2.0, 0.0],
            default_tuning_index: 0,
            default_dxdy_guess: None,
        },
    );

    // Expansion histories for parameterized gravity models.
    registry.register_expansion(
        "lcdm",
        ExpansionModelSpec {
            rho_evolution: false,
            default_parameters: vec![0.7],
        },
    );
    registry.register_expansion(
        "wowa",
        ExpansionModelSpec {
            rho_evolution: false,
            // Omega_smg, w0, wa
            default_parameters: vec![0.7, -1.0, 0.0],
        },
    );
    registry.register_expansion(
        "wede",
        ExpansionModelSpec {
            rho_evolution: false,
            // Omega_smg, w0, Omega_e
            default_parameters: vec![0.7, -1.0, 1e-3],
        },
    );
    registry.register_expansion(
        "wext",
        ExpansionModelSpec {
            rho_evolution: true,
            default_parameters: vec![0.7],
        },
    );
    registry.register_expansion(
        "rho_de",
        ExpansionModelSpec {
            rho_evolution: true,
            default_parameters: vec![0.7],
        },
    );
}
