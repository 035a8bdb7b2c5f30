//! Typed test variables and their literal text form.
//!
//! Acceptance tests inject typed variables into their configurations and
//! then compare resource attributes against the same inputs. Attribute
//! checks work on strings, so [`convert_config_variable`] turns a
//! [`ConfigVariable`] into the text the provider state will hold.
//!
//! Only scalar strings, booleans and integers have a literal form. Any other
//! kind is rejected with [`AccTestError::UnsupportedType`]; the calling test
//! should fail rather than compare against a placeholder.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::AccTestError;

/// A typed value injected into a test configuration.
///
/// Deserialises from plain JSON values, so variable sets can be kept in
/// fixtures: `"eu01"`, `true`, `10`, `1.5`, `[...]` and `{...}` map to the
/// matching variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigVariable {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// String value.
    String(String),
    /// Ordered list of values.
    List(Vec<ConfigVariable>),
    /// String-keyed map of values.
    Map(BTreeMap<String, ConfigVariable>),
}

impl ConfigVariable {
    /// Creates a string variable.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a boolean variable.
    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Creates an integer variable.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Returns the lower-case name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<&str> for ConfigVariable {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigVariable {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigVariable {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigVariable {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ConfigVariable {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Converts a config variable into its literal text form.
///
/// Strings are returned unquoted, booleans as `true`/`false`, and integers
/// in plain decimal notation.
///
/// # Errors
///
/// Returns [`AccTestError::UnsupportedType`] for floats, lists and maps.
///
/// # Example
///
/// ```
/// use stackit_acctest::{ConfigVariable, convert_config_variable};
///
/// let name = convert_config_variable(&ConfigVariable::string("my-network"))?;
/// assert_eq!(name, "my-network");
/// # Ok::<(), stackit_acctest::AccTestError>(())
/// ```
pub fn convert_config_variable(variable: &ConfigVariable) -> Result<String, AccTestError> {
    match variable {
        ConfigVariable::String(value) => Ok(value.clone()),
        ConfigVariable::Bool(value) => Ok(value.to_string()),
        ConfigVariable::Integer(value) => Ok(value.to_string()),
        ConfigVariable::Float(_) | ConfigVariable::List(_) | ConfigVariable::Map(_) => {
            let kind = variable.kind();
            tracing::trace!("rejecting config variable of kind {kind}");
            Err(AccTestError::UnsupportedType { kind })
        }
    }
}

#[cfg(test)]
#[path = "variable_tests.rs"]
mod tests;
