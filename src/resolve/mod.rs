//! Configuration resolution for the modified-gravity sector.

mod alias;
mod resolver;
mod shooting;
mod types;

pub use alias::{AliasCategory, resolve_ordered, resolve_yes_no};
pub use resolver::resolve;
pub use shooting::TuningHandle;
pub use types::{PertInitialConditions, QsMethod, ResolvedConfig};

use crate::constants::WARNING_VERBOSITY_THRESHOLD;
use tracing::warn;

/// Emit advisory warnings about risky input choices.
///
/// Purely informational, only at high verbosity. The h' extraction
/// choice deserves a note in both polarities: the Einstein 00 equation
/// carries a gauge-dependent singularity at alpha_B = 2, while the
/// trace equation disagrees with the constraint at very large k in some
/// models.
pub fn warn_input_choices(config: &ResolvedConfig, input_verbose: u8) {
    if input_verbose <= WARNING_VERBOSITY_THRESHOLD {
        return;
    }

    if config.get_h_from_trace {
        warn!(
            "get_h_from_trace is enabled; consider disabling it if you need very large \
             k modes (typically k > 10 Mpc^-1), where the constraint and the dynamical \
             equations disagree by a non negligible amount in some models"
        );
    } else {
        warn!(
            "get_h_from_trace is disabled; this can cause gauge dependent singularities \
             if your model crosses alpha_B = 2, and the Einstein 00 equation will be \
             used for more than setting initial conditions for h'"
        );
    }
}
