//! Resolved configuration types.

use super::alias::AliasCategory;
use crate::constants::{DEFAULT_OUTPUT_BACKGROUND, DEFAULT_TUNING_DXDY_GUESS};
use serde::Serialize;

/// Evolution method for the scalar-field perturbations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QsMethod {
    /// Switch between quasi-static and fully dynamic per regime.
    Automatic,
    /// Exact evolution of all field perturbations.
    #[default]
    FullyDynamic,
    /// Quasi-static approximation everywhere.
    QuasiStatic,
    /// Fully dynamic, with the quasi-static quantities traced for debugging.
    FullyDynamicDebug,
    /// Quasi-static everywhere, ignoring the regime test (debugging).
    QuasiStaticDebug,
}

impl QsMethod {
    /// Ordered alias table for free-form input.
    ///
    /// Declaration order is part of the contract: later categories win
    /// on multiple matches (see [`super::resolve_ordered`]).
    pub const ALIAS_TABLE: &'static [AliasCategory<Self>] = &[
        AliasCategory {
            aliases: &["automatic", "a", "A"],
            value: Self::Automatic,
        },
        AliasCategory {
            aliases: &["fully_dynamic", "fd", "FD"],
            value: Self::FullyDynamic,
        },
        AliasCategory {
            aliases: &["quasi_static", "qs", "QS"],
            value: Self::QuasiStatic,
        },
        AliasCategory {
            aliases: &["fully_dynamic_debug", "fdd", "FDD"],
            value: Self::FullyDynamicDebug,
        },
        AliasCategory {
            aliases: &["quasi_static_debug", "qsd", "QSD"],
            value: Self::QuasiStaticDebug,
        },
    ];
}

impl std::fmt::Display for QsMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Automatic => "automatic",
            Self::FullyDynamic => "fully_dynamic",
            Self::QuasiStatic => "quasi_static",
            Self::FullyDynamicDebug => "fully_dynamic_debug",
            Self::QuasiStaticDebug => "quasi_static_debug",
        };
        write!(f, "{name}")
    }
}

/// Initial conditions for the scalar-field perturbations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PertInitialConditions {
    /// Single-clock (adiabatic-like) initial conditions.
    SingleClock,
    /// Gravitating attractor.
    GravitatingAttr,
    /// Start the field perturbation at zero.
    Zero,
    /// Kinetic term only.
    KinOnly,
    /// External-field attractor.
    #[default]
    ExtFieldAttr,
}

impl PertInitialConditions {
    /// Resolve from an exact literal, unlike the alias-based fields.
    ///
    /// Anything but a verbatim match (including case differences)
    /// yields `None` and the caller keeps the default.
    pub fn from_exact(raw: &str) -> Option<Self> {
        match raw {
            "single_clock" => Some(Self::SingleClock),
            "gravitating_attr" => Some(Self::GravitatingAttr),
            "zero" => Some(Self::Zero),
            "kin_only" => Some(Self::KinOnly),
            "ext_field_attr" => Some(Self::ExtFieldAttr),
            _ => None,
        }
    }
}

impl std::fmt::Display for PertInitialConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SingleClock => "single_clock",
            Self::GravitatingAttr => "gravitating_attr",
            Self::Zero => "zero",
            Self::KinOnly => "kin_only",
            Self::ExtFieldAttr => "ext_field_attr",
        };
        write!(f, "{name}")
    }
}

/// Fully resolved modified-gravity configuration.
///
/// Built exactly once at startup and read-only afterwards; the single
/// sanctioned later mutation is the shooting algorithm's update of the
/// tuned parameter through [`super::TuningHandle`].
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    /// Master switch; true once resolution has run.
    pub has_modified_gravity: bool,
    /// Quasi-static approximation scheme.
    pub qs_method: QsMethod,
    /// Whether perturbations evolve delta-phi instead of v_X.
    pub use_delta_phi: bool,
    /// Initial conditions for the scalar perturbations.
    pub pert_initial_conditions: PertInitialConditions,
    /// Selected gravity model name.
    pub gravity_model: String,
    /// Expansion history, present only for non-self-evolving models.
    pub expansion_model: Option<String>,
    /// Whether the model's own field equations are integrated.
    pub field_evolution: bool,
    /// Whether M2 is integrated from alpha_M.
    pub m2_evolution: bool,
    /// Whether the background energy density is evolved explicitly.
    pub rho_evolution: bool,
    /// Model parameter vector; the shooting algorithm tunes one entry.
    pub parameters: Vec<f64>,
    /// Index of the tunable entry in `parameters`.
    pub tuning_index: usize,
    /// Initial step-size guess for the shooting algorithm.
    pub tuning_dxdy_guess: f64,
    /// When true, shooting is bypassed entirely (no-tuning debug mode).
    pub omega_debug_mode: bool,
    /// Threshold softening the scalar sound-speed stability test.
    pub cs2_safe: f64,
    /// Threshold softening the scalar kinetic-term stability test.
    pub d_safe: f64,
    /// Threshold softening the tensor sound-speed stability test.
    pub ct2_safe: f64,
    /// Threshold softening the tensor kinetic-term (M2) stability test.
    pub m2_safe: f64,
    /// Value added to the kineticity to cure early-time perturbations.
    pub kineticity_safe: f64,
    /// Stability tests are skipped below this scale factor.
    pub a_min_stability_test: f64,
    /// Whether the perturbation stability tests are skipped entirely.
    pub skip_stability_tests: bool,
    /// Get h' from the Einstein trace rather than the 00 equation.
    pub get_h_from_trace: bool,
    /// Amount of information written to the background output table.
    pub output_background_verbosity: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            has_modified_gravity: false,
            qs_method: QsMethod::default(),
            use_delta_phi: false,
            pert_initial_conditions: PertInitialConditions::default(),
            gravity_model: String::new(),
            expansion_model: None,
            field_evolution: false,
            m2_evolution: false,
            rho_evolution: false,
            parameters: Vec::new(),
            tuning_index: 0,
            tuning_dxdy_guess: DEFAULT_TUNING_DXDY_GUESS,
            omega_debug_mode: false,
            cs2_safe: 0.0,
            d_safe: 0.0,
            ct2_safe: 0.0,
            m2_safe: 0.0,
            kineticity_safe: 0.0,
            a_min_stability_test: 0.0,
            skip_stability_tests: false,
            get_h_from_trace: false,
            output_background_verbosity: DEFAULT_OUTPUT_BACKGROUND,
        }
    }
}
