//! Application-wide constants.
//!
//! All default values and thresholds are defined here to ensure
//! consistency and make changes easy to track.

/// Default initial guess for the shooting step-size dx/dy.
///
/// Applied before the model registry is consulted; models may refine it
/// when the user supplied no explicit guess.
pub const DEFAULT_TUNING_DXDY_GUESS: f64 = 1.0;

/// Default verbosity level for the background output table.
pub const DEFAULT_OUTPUT_BACKGROUND: f64 = 1.0;

/// Verbosity level above which advisory input warnings are emitted.
pub const WARNING_VERBOSITY_THRESHOLD: u8 = 10;

/// Precision defaults consumed by the downstream integrators.
pub mod precision {
    /// Tolerance on the perturbation initial-condition solution.
    pub const PERT_IC_TOLERANCE: f64 = 2e-2;

    /// Reference redshift at which perturbation ICs are anchored.
    pub const PERT_IC_INI_Z_REF: f64 = 1e10;

    /// Regulator added to denominators in the IC equations.
    pub const PERT_IC_REGULATOR: f64 = 1e-15;

    /// Tolerance for the quasi-static initial-condition test.
    pub const PERT_QS_IC_TOLERANCE_TEST: f64 = 10.0;

    /// Smallest scale factor at which perturbations are evolved.
    pub const MIN_A_PERT: f64 = 0.0;

    /// Default conformal-time sampling stepsize for perturbation output.
    pub const PERTURBATIONS_SAMPLING_STEPSIZE: f64 = 0.1;

    /// Hard cap on the sampling stepsize once modified gravity is
    /// enabled, otherwise the ISW effect is undersampled.
    pub const MAX_SAMPLING_STEPSIZE_SMG: f64 = 0.05;
}
