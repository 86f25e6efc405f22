//! Data structures for the physical model registry.

use serde::Serialize;

/// Structural descriptor for a gravity model.
///
/// Describes how the model constrains the background solver: whether
/// its field equations are integrated self-consistently, whether the
/// effective Planck mass and the dark-energy density need their own
/// evolution equations, and the shape of its parameter vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GravityModelSpec {
    /// Whether the model requires solving its own background field equations.
    pub field_evolution: bool,
    /// Whether M2 must be integrated from alpha_M.
    pub m2_evolution: bool,
    /// Whether the background energy density is evolved explicitly.
    pub rho_evolution: bool,
    /// Default parameter vector for the model.
    pub default_parameters: Vec<f64>,
    /// Which parameter the shooting algorithm tunes by default.
    pub default_tuning_index: usize,
    /// Model-specific initial dx/dy guess for the shooting step, if any.
    pub default_dxdy_guess: Option<f64>,
}

/// Structural descriptor for a parameterized expansion history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpansionModelSpec {
    /// Whether the dark-energy density is evolved as its own variable.
    pub rho_evolution: bool,
    /// Default parameter vector for the expansion history.
    pub default_parameters: Vec<f64>,
}

/// Resolved gravity-model properties handed to the config resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityProperties {
    /// Whether the model requires solving its own background field equations.
    pub field_evolution: bool,
    /// Whether M2 must be integrated from alpha_M.
    pub m2_evolution: bool,
    /// Whether the background energy density is evolved explicitly.
    pub rho_evolution: bool,
    /// The model's parameter vector (a fresh copy owned by the caller).
    pub parameters: Vec<f64>,
    /// Model default tuning index, absent when the user supplied one.
    pub tuning_index: Option<usize>,
    /// Refined dx/dy guess, present only when the model declares one.
    pub dxdy_guess: Option<f64>,
}

/// Resolved expansion-model properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionProperties {
    /// Whether the dark-energy density is evolved as its own variable.
    pub rho_evolution: bool,
    /// The expansion history's parameter vector.
    pub parameters: Vec<f64>,
}
