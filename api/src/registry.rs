//! Sampler Registry

use sampler_core::error::*;
use sampler_core::paramset::*;
use sampler_core::sampler::*;
use samplers::*;
use std::collections::HashMap;

/// Builds a sampler from its parameter set.
pub type SamplerConstructor = fn(&ParamSet) -> Result<Box<dyn Sampler>, ConfigError>;

lazy_static! {
    /// Registry holding the built-in sampler types. Built on first use.
    static ref DEFAULT_REGISTRY: SamplerRegistry = SamplerRegistry::new();
}

/// Maps sampler type names to their constructors.
#[derive(Clone)]
pub struct SamplerRegistry {
    /// Constructors stored by name.
    constructors: HashMap<String, SamplerConstructor>,
}

impl SamplerRegistry {
    /// Returns a registry with the built-in sampler types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("independent", make_independent_sampler);
        registry.register("random", make_independent_sampler);
        registry
    }

    /// Returns a registry with no sampler types.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers a constructor under a name, replacing any existing one.
    ///
    /// * `name`        - Sampler type name.
    /// * `constructor` - The constructor.
    pub fn register(&mut self, name: &str, constructor: SamplerConstructor) {
        if self
            .constructors
            .insert(name.to_string(), constructor)
            .is_some()
        {
            warn!("Sampler '{name}' registered more than once; using the latest");
        } else {
            debug!("Registered sampler '{name}'");
        }
    }

    /// Returns true if a constructor is registered under the name.
    ///
    /// * `name` - Sampler type name.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Creates a sampler.
    ///
    /// * `name`     - Sampler type name.
    /// * `paramset` - Parameter set.
    pub fn make_sampler(&self, name: &str, paramset: &ParamSet) -> Result<Box<dyn Sampler>, ConfigError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSampler {
                name: name.to_string(),
            })?;

        let sampler = constructor(paramset)?;
        paramset.report_unused();
        Ok(sampler)
    }
}

impl Default for SamplerRegistry {
    /// Returns the "default value" for `SamplerRegistry`.
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process wide registry of built-in sampler types.
pub fn default_registry() -> &'static SamplerRegistry {
    &DEFAULT_REGISTRY
}

/// Creates a sampler using the process wide registry.
///
/// * `name`     - Sampler type name.
/// * `paramset` - Parameter set.
pub fn make_sampler(name: &str, paramset: &ParamSet) -> Result<Box<dyn Sampler>, ConfigError> {
    default_registry().make_sampler(name, paramset)
}

/// Creates an `IndependentSampler`.
///
/// * `paramset` - Parameter set.
fn make_independent_sampler(paramset: &ParamSet) -> Result<Box<dyn Sampler>, ConfigError> {
    Ok(Box::new(IndependentSampler::try_from(paramset)?))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_core::geometry::*;

    fn samples(n: i32) -> ParamSet {
        let mut ps = ParamSet::new();
        ps.add_int("samples", &[n]);
        ps
    }

    #[test]
    fn builtins_are_registered() {
        let registry = SamplerRegistry::new();
        assert_eq!(registry.names(), vec!["independent", "random"]);
        assert!(registry.contains("independent"));
        assert!(!registry.contains("stratified"));
    }

    #[test]
    fn make_sampler_by_name() {
        let sampler = make_sampler("independent", &samples(16)).unwrap();
        assert_eq!(sampler.samples_per_pixel(), 16);
    }

    #[test]
    fn unknown_name_is_a_config_error() {
        let err = make_sampler("sobol", &samples(16)).err();
        assert_eq!(
            err,
            Some(ConfigError::UnknownSampler {
                name: "sobol".to_string()
            })
        );
    }

    #[test]
    fn invalid_configuration_is_surfaced() {
        assert!(matches!(
            make_sampler("independent", &ParamSet::new()).err(),
            Some(ConfigError::Missing { .. })
        ));
        assert!(matches!(
            make_sampler("independent", &samples(0)).err(),
            Some(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn alias_builds_the_same_sampler() {
        let p = Point2i::new(6, 2);
        let mut a = make_sampler("independent", &samples(4)).unwrap();
        let mut b = make_sampler("random", &samples(4)).unwrap();
        a.start_pixel(&p, 1);
        b.start_pixel(&p, 1);
        assert_eq!(a.next_1d(), b.next_1d());
    }

    #[test]
    fn custom_constructor_can_be_registered() {
        fn single(_: &ParamSet) -> Result<Box<dyn Sampler>, ConfigError> {
            Ok(Box::new(IndependentSampler::new(1)))
        }

        let mut registry = SamplerRegistry::empty();
        assert!(registry.names().is_empty());
        registry.register("single", single);
        let sampler = registry.make_sampler("single", &ParamSet::new()).unwrap();
        assert_eq!(sampler.samples_per_pixel(), 1);
    }
}
