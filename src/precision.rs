//! Precision settings shared with the downstream integrators.

use crate::constants::precision as defaults;
use serde::Serialize;

/// Numerical precision settings consumed by the background and
/// perturbation integrators. Resolution may overwrite individual fields
/// from the parameter file; [`adjust`] applies the modified-gravity
/// post-pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Precision {
    /// Tolerance on the perturbation initial-condition solution.
    pub pert_ic_tolerance: f64,
    /// Reference redshift at which perturbation ICs are anchored.
    pub pert_ic_ini_z_ref: f64,
    /// Regulator added to denominators in the IC equations.
    pub pert_ic_regulator: f64,
    /// Tolerance for the quasi-static initial-condition test.
    pub pert_qs_ic_tolerance_test: f64,
    /// Smallest scale factor at which perturbations are evolved.
    pub min_a_pert: f64,
    /// Conformal-time sampling stepsize for perturbation output.
    pub perturbations_sampling_stepsize: f64,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            pert_ic_tolerance: defaults::PERT_IC_TOLERANCE,
            pert_ic_ini_z_ref: defaults::PERT_IC_INI_Z_REF,
            pert_ic_regulator: defaults::PERT_IC_REGULATOR,
            pert_qs_ic_tolerance_test: defaults::PERT_QS_IC_TOLERANCE_TEST,
            min_a_pert: defaults::MIN_A_PERT,
            perturbations_sampling_stepsize: defaults::PERTURBATIONS_SAMPLING_STEPSIZE,
        }
    }
}

/// Readjust precision parameters for modified gravity.
///
/// The perturbation sampling stepsize is capped, otherwise the ISW
/// effect is undersampled. Idempotent.
pub fn adjust(precision: &mut Precision) {
    if precision.perturbations_sampling_stepsize > defaults::MAX_SAMPLING_STEPSIZE_SMG {
        precision.perturbations_sampling_stepsize = defaults::MAX_SAMPLING_STEPSIZE_SMG;
    }
}
