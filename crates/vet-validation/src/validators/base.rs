//! Options shared by every validator and the baseline presence check

use crate::outcome::{failed_with_code, Outcome};
use crate::traits::{BaseBuilder, Validator};
use serde_json::Value;

/// Presence rules shared by every validator kind
#[derive(Debug, Clone, PartialEq)]
pub struct BaseOptions {
    /// Whether an explicit `null` is accepted (default: false)
    pub nullable: bool,
    /// Whether an absent value is a failure (default: true)
    pub required: bool,
    /// Value used when nothing is provided. An explicit `null` does not trigger it.
    pub default: Option<Value>,
}

impl BaseOptions {
    pub fn new() -> Self {
        Self {
            nullable: false,
            required: true,
            default: None,
        }
    }

    /// Run the presence checks.
    ///
    /// Returns the value to continue with: the input, the substituted default,
    /// or `None` when an optional value is absent.
    pub fn check(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        let value = match value {
            Some(value) => Some(value.clone()),
            None => match &self.default {
                Some(default) => Some(default.clone()),
                None if self.required => {
                    return failed_with_code(format!("{} is required", field), "required");
                }
                None => None,
            },
        };

        if matches!(value, Some(Value::Null)) && !self.nullable {
            return failed_with_code(format!("{} cannot be null", field), "null");
        }

        Ok(value)
    }

    /// Run the presence checks and split the outcome into a concrete value for
    /// type-specific checks, or the early result for null and absent values.
    pub(crate) fn present(&self, field: &str, value: Option<&Value>) -> Outcome<Presence> {
        Ok(match self.check(field, value)? {
            Some(Value::Null) => Presence::Skip(Some(Value::Null)),
            None => Presence::Skip(None),
            Some(value) => Presence::Value(value),
        })
    }
}

/// Result of the presence checks as seen by concrete validators
pub(crate) enum Presence {
    /// A non-null value that still needs type-specific checks
    Value(Value),
    /// Null or absent; returned as-is without further checks
    Skip(Option<Value>),
}

impl Default for BaseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator that only runs the presence checks and accepts any value
#[derive(Debug, Clone, Default)]
pub struct AnyValidator {
    pub base: BaseOptions,
}

impl AnyValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseBuilder for AnyValidator {
    fn base_options_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

impl Validator for AnyValidator {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        self.base.check(field, value)
    }

    fn base_options(&self) -> &BaseOptions {
        &self.base
    }

    fn rule_name(&self) -> &'static str {
        "any"
    }
}
