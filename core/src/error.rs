//! Configuration Errors

use thiserror::Error;

/// Errors raised while building a sampler from its configuration. These are
/// the only errors the sampling layer produces; nothing fails once a sampler
/// exists.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required parameter was not given.
    #[error("missing required parameter '{name}'")]
    Missing { name: String },

    /// A parameter was given with the wrong type or arity.
    #[error("parameter '{name}' must be {expected}")]
    InvalidType { name: String, expected: &'static str },

    /// A parameter has the right type but an unusable value.
    #[error("parameter '{name}' has invalid value {value}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: &'static str,
    },

    /// No constructor is registered under the requested name.
    #[error("sampler '{name}' unknown")]
    UnknownSampler { name: String },
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let e = ConfigError::Missing {
            name: "samples".to_string(),
        };
        assert_eq!(e.to_string(), "missing required parameter 'samples'");

        let e = ConfigError::InvalidValue {
            name: "samples".to_string(),
            value: "0".to_string(),
            reason: "must be positive",
        };
        assert_eq!(
            e.to_string(),
            "parameter 'samples' has invalid value 0: must be positive"
        );

        let e = ConfigError::UnknownSampler {
            name: "sobol".to_string(),
        };
        assert_eq!(e.to_string(), "sampler 'sobol' unknown");
    }
}
