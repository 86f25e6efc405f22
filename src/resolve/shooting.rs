//! Shooting setup and the tuning write capability.

use super::types::ResolvedConfig;
use crate::error::{Error, Result};
use crate::keystore::KeyStore;
use tracing::debug;

/// Narrow write capability over the tuned model parameter.
///
/// The external shooting algorithm receives this handle instead of the
/// whole configuration, so "resolve once, read-only afterwards" holds
/// everywhere except this one sanctioned path.
#[derive(Debug)]
pub struct TuningHandle<'a> {
    parameters: &'a mut [f64],
    index: usize,
}

impl TuningHandle<'_> {
    /// Current value of the tuned parameter.
    pub fn get(&self) -> f64 {
        self.parameters[self.index]
    }

    /// Overwrite the tuned parameter in place.
    pub fn set(&mut self, value: f64) {
        self.parameters[self.index] = value;
    }

    /// Index of the tuned entry.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl ResolvedConfig {
    /// Hand out the write capability for the tuned parameter.
    ///
    /// Returns `None` in no-tuning debug mode, where shooting is
    /// bypassed entirely.
    pub fn tuning_handle(&mut self) -> Option<TuningHandle<'_>> {
        if self.omega_debug_mode {
            return None;
        }
        Some(TuningHandle {
            index: self.tuning_index,
            parameters: &mut self.parameters,
        })
    }
}

/// Finalize the tuning-index/parameter-vector binding.
///
/// Applies the optional one-time `shooting_parameter_smg` override in
/// the normal tuning case, then bounds-checks the tuning index. The
/// bounds check runs even in debug mode: the parameter vector must be
/// well-formed for every later consumer.
pub fn finalize(keystore: &KeyStore, config: &mut ResolvedConfig) -> Result<()> {
    if config.tuning_index >= config.parameters.len() {
        return Err(Error::TuningIndexOutOfRange {
            index: config.tuning_index,
            size: config.parameters.len(),
        });
    }

    if !config.omega_debug_mode
        && let Some(value) = keystore.get_f64("shooting_parameter_smg")
    {
        debug!(
            index = config.tuning_index,
            value, "pinning shooting starting point from parameter file"
        );
        config.parameters[config.tuning_index] = value;
    }

    Ok(())
}
