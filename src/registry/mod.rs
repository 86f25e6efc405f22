//! Registry of gravity and expansion models.
//!
//! The registry maps model names to small structural descriptors: the
//! capability flags the solver needs to pick an integration path, the
//! model's parameter vector, and its defaults for the shooting setup.
//! New models are added by registration, not by subclassing.

mod catalog;
mod types;

pub use types::{ExpansionModelSpec, ExpansionProperties, GravityModelSpec, GravityProperties};

use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Lookup from model name to structural descriptor.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    gravity: HashMap<String, GravityModelSpec>,
    expansion: HashMap<String, ExpansionModelSpec>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the built-in model catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        catalog::register_builtin(&mut registry);
        registry
    }

    /// Register (or replace) a gravity model descriptor.
    pub fn register_gravity(&mut self, name: &str, spec: GravityModelSpec) {
        self.gravity.insert(name.to_string(), spec);
    }

    /// Register (or replace) an expansion model descriptor.
    pub fn register_expansion(&mut self, name: &str, spec: ExpansionModelSpec) {
        self.expansion.insert(name.to_string(), spec);
    }

    /// Names of all registered gravity models, sorted.
    pub fn gravity_model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gravity.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the properties of a gravity model.
    ///
    /// The presence flags tell the registry whether the user supplied an
    /// explicit tuning index or dx/dy guess: model defaults for these
    /// are applied only when the user did not.
    pub fn gravity_properties(
        &self,
        name: &str,
        has_tuning_index_override: bool,
        has_dxdy_guess_override: bool,
    ) -> Result<GravityProperties> {
        let spec = self.gravity.get(name).ok_or_else(|| Error::UnknownModel {
            kind: "gravity",
            name: name.to_string(),
        })?;

        // Model defaults apply only when the user supplied no override.
        let tuning_index = if has_tuning_index_override {
            None
        } else {
            Some(spec.default_tuning_index)
        };
        let dxdy_guess = if has_dxdy_guess_override {
            None
        } else {
            spec.default_dxdy_guess
        };

        debug!(
            model = name,
            field_evolution = spec.field_evolution,
            parameters = spec.default_parameters.len(),
            "resolved gravity model properties"
        );

        Ok(GravityProperties {
            field_evolution: spec.field_evolution,
            m2_evolution: spec.m2_evolution,
            rho_evolution: spec.rho_evolution,
            parameters: spec.default_parameters.clone(),
            tuning_index,
            dxdy_guess,
        })
    }

    /// Resolve the properties of an expansion model.
    pub fn expansion_properties(&self, name: &str) -> Result<ExpansionProperties> {
        let spec = self
            .expansion
            .get(name)
            .ok_or_else(|| Error::UnknownModel {
                kind: "expansion",
                name: name.to_string(),
            })?;

        debug!(
            model = name,
            rho_evolution = spec.rho_evolution,
            "resolved expansion model properties"
        );

        Ok(ExpansionProperties {
            rho_evolution: spec.rho_evolution,
            parameters: spec.default_parameters.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contains_known_models() {
        let registry = ModelRegistry::builtin();
        assert!(registry.gravity_properties("propto_omega", false, false).is_ok());
        assert!(registry.gravity_properties("brans_dicke", false, false).is_ok());
        assert!(registry.expansion_properties("lcdm").is_ok());
        assert!(registry.expansion_properties("wowa").is_ok());
    }

    #[test]
    fn test_unknown_gravity_model_fails() {
        let registry = ModelRegistry::builtin();
        let result = registry.gravity_properties("mond", false, false);
        assert!(matches!(
            result,
            Err(Error::UnknownModel { kind: "gravity", .. })
        ));
    }

    #[test]
    fn test_unknown_expansion_model_fails() {
        let registry = ModelRegistry::builtin();
        let result = registry.expansion_properties("cpl_extended");
        assert!(matches!(
            result,
            Err(Error::UnknownModel { kind: "expansion", .. })
        ));
    }

    #[test]
    fn test_dxdy_default_applied_only_without_override() {
        let registry = ModelRegistry::builtin();

        let props = registry
            .gravity_properties("quintessence_monomial", false, false)
            .unwrap();
        assert_eq!(props.dxdy_guess, Some(1e-7));

        let props = registry
            .gravity_properties("quintessence_monomial", false, true)
            .unwrap();
        assert_eq!(props.dxdy_guess, None);
    }

    #[test]
    fn test_registration_extends_the_catalog() {
        let mut registry = ModelRegistry::new();
        registry.register_gravity(
            "toy_model",
            GravityModelSpec {
                field_evolution: true,
                m2_evolution: false,
                rho_evolution: false,
                default_parameters: vec![0.1, 0.2],
                default_tuning_index: 1,
                default_dxdy_guess: None,
            },
        );

        let props = registry.gravity_properties("toy_model", false, false).unwrap();
        assert_eq!(props.parameters, vec![0.1, 0.2]);
        assert_eq!(props.tuning_index, Some(1));
    }

    #[test]
    fn test_tuning_index_default_suppressed_by_override() {
        let registry = ModelRegistry::builtin();
        let props = registry
            .gravity_properties("brans_dicke", true, false)
            .unwrap();
        assert_eq!(props.tuning_index, None);
    }

    #[test]
    fn test_parameter_vectors_are_fresh_copies() {
        let registry = ModelRegistry::builtin();
        let mut a = registry.gravity_properties("nkgb", false, false).unwrap();
        a.parameters[0] = 99.0;
        let b = registry.gravity_properties("nkgb", false, false).unwrap();
        assert_eq!(b.parameters[0], 1.0);
    }
}
