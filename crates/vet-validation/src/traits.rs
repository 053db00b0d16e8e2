//! Core validation traits

use crate::outcome::Outcome;
use crate::validators::base::BaseOptions;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A validator node shared inside a tree
pub type SharedValidator = Arc<dyn Validator>;

/// Core validation trait that every node of a validator tree implements.
///
/// `value` is `None` when nothing was provided at all, which is different from
/// an explicit `Value::Null`. The returned data is the canonical form of the
/// input, and `None` again stands for "absent".
pub trait Validator: fmt::Debug + Send + Sync {
    /// Validate a single value located at `field`
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>>;

    /// Options shared by every validator kind
    fn base_options(&self) -> &BaseOptions;

    /// Get the validator kind name
    fn rule_name(&self) -> &'static str;

    /// Move this validator behind an `Arc` so it can be placed into a tree
    fn shared(self) -> SharedValidator
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        (**self).validate(field, value)
    }

    fn base_options(&self) -> &BaseOptions {
        (**self).base_options()
    }

    fn rule_name(&self) -> &'static str {
        (**self).rule_name()
    }
}

/// Builder methods for the options every validator shares
pub trait BaseBuilder: Sized {
    /// Mutable access to the shared options
    fn base_options_mut(&mut self) -> &mut BaseOptions;

    /// Let an explicit `null` pass through unchanged
    fn nullable(mut self) -> Self {
        self.base_options_mut().nullable = true;
        self
    }

    /// Accept an absent value
    fn optional(mut self) -> Self {
        self.base_options_mut().required = false;
        self
    }

    /// Set whether an absent value is a failure
    fn required(mut self, required: bool) -> Self {
        self.base_options_mut().required = required;
        self
    }

    /// Value substituted when nothing is provided; makes `required` irrelevant
    fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.base_options_mut().default = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{number, string};

    #[test]
    fn test_shared_validator_delegates() {
        let shared = string().max(3).shared();
        assert_eq!(shared.rule_name(), "string");
        assert!(shared.base_options().required);
        assert!(shared.validate("code", Some(&serde_json::json!("ABCD"))).is_err());
    }

    #[test]
    fn test_presence_builders() {
        let validator = number().optional().required(true).nullable();
        assert!(validator.base_options().required);
        assert!(validator.base_options().nullable);
        assert_eq!(validator.validate("age", Some(&Value::Null)), Ok(Some(Value::Null)));

        let validator = number().default_value("7");
        assert_eq!(validator.validate("age", None), Ok(Some(serde_json::json!(7))));
    }
}
