//! Parameter Sets

use crate::common::*;
use crate::error::*;
use std::collections::HashMap;
use std::fmt;

mod paramset_item;

// Re-export
pub use paramset_item::*;

/// A hashmap of parameter set items stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores parameter set items of different types in hashmaps. This is the
/// configuration object handed to sampler constructors.
#[derive(Clone, Debug, Default)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub ints: ParamSetMap<Int>,
    pub floats: ParamSetMap<Float>,
    pub strings: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            self.$paramset
                .insert(String::from(name), ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            self.$paramset
                .get(name)
                .and_then(|param| param.single().cloned())
                .unwrap_or(default)
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            writeln!($formatter, "\"{} {}\" {}", $param_type, name, $params[name])?;
        }
    };
}

/// Define a macro that collects the names of items that were never looked up.
macro_rules! collect_unused {
    ($params: expr, $param_type: literal, $unused: expr) => {
        for (name, param) in $params.iter() {
            if !param.looked_up.get() {
                warn!("Parameter \"{} {}\" not used", $param_type, name);
                $unused.push(name.clone());
            }
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self::default()
    }

    paramset_find_one!(find_one_int, Int, ints);
    paramset_add!(add_int, Int, ints);
    paramset_add!(add_bool, bool, bools);
    paramset_add!(add_float, Float, floats);
    paramset_add!(add_string, String, strings);

    /// Finds a parameter that must be given as exactly one positive integer.
    ///
    /// * `name` - Parameter name.
    pub fn find_required_positive_int(&self, name: &str) -> Result<Int, ConfigError> {
        let param = match self.ints.get(name) {
            Some(param) => param,
            None if self.contains(name) => {
                return Err(ConfigError::InvalidType {
                    name: name.to_string(),
                    expected: "an integer",
                })
            }
            None => {
                return Err(ConfigError::Missing {
                    name: name.to_string(),
                })
            }
        };

        match param.single() {
            Some(&v) if v > 0 => Ok(v),
            Some(&v) => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                value: v.to_string(),
                reason: "must be positive",
            }),
            None => Err(ConfigError::InvalidType {
                name: name.to_string(),
                expected: "a single integer",
            }),
        }
    }

    /// Returns true if a parameter with the given name exists under any type.
    ///
    /// * `name` - Parameter name.
    pub fn contains(&self, name: &str) -> bool {
        self.bools.contains_key(name)
            || self.ints.contains_key(name)
            || self.floats.contains_key(name)
            || self.strings.contains_key(name)
    }

    /// Logs a warning for each parameter that was never looked up and returns
    /// their names in sorted order.
    pub fn report_unused(&self) -> Vec<String> {
        let mut unused = vec![];
        collect_unused!(self.bools, "bool", unused);
        collect_unused!(self.ints, "integer", unused);
        collect_unused!(self.floats, "float", unused);
        collect_unused!(self.strings, "string", unused);
        unused.sort();
        unused
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.bools, "bool", f);
        display_param!(self.ints, "integer", f);
        display_param!(self.floats, "float", f);
        display_param!(self.strings, "string", f);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
