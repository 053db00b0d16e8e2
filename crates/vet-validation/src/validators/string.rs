//! String validator: type check, trimming, length, pattern and allow-list

use crate::outcome::{failed_with_code, Outcome};
use crate::traits::{BaseBuilder, Validator};
use crate::validators::base::{BaseOptions, Presence};
use regex::Regex;
use serde_json::Value;

/// Validator for string values
#[derive(Debug, Clone)]
pub struct StringValidator {
    pub base: BaseOptions,
    /// Minimum length. Unset means 0 when the default value is `""`, otherwise 1.
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    pub max: Option<usize>,
    /// Strip surrounding whitespace before checking (default: true)
    pub trim: bool,
    /// The value must contain a match of this pattern
    pattern: Option<Regex>,
    /// Allowed values
    pub allowed: Option<Vec<String>>,
}

impl StringValidator {
    pub fn new() -> Self {
        Self {
            base: BaseOptions::new(),
            min: None,
            max: None,
            trim: true,
            pattern: None,
            allowed: None,
        }
    }

    /// Set minimum length constraint
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum length constraint
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set whether surrounding whitespace is removed first
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Require the value to contain a match of `pattern`
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compile `pattern` and require the value to contain a match of it
    pub fn try_pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.pattern(Regex::new(pattern)?))
    }

    /// Restrict the value to an allow-list
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the value to the values of a string-keyed mapping
    pub fn one_of_map<I, K, S>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        self.one_of(entries.into_iter().map(|(_, value)| value))
    }

    fn effective_min(&self) -> usize {
        match self.min {
            Some(min) => min,
            None if self.base.default.as_ref().and_then(Value::as_str) == Some("") => 0,
            None => 1,
        }
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseBuilder for StringValidator {
    fn base_options_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

impl Validator for StringValidator {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        let value = match self.base.present(field, value)? {
            Presence::Value(value) => value,
            Presence::Skip(early) => return Ok(early),
        };

        let text = match value {
            Value::String(text) => text,
            _ => return failed_with_code(format!("{} must be a string", field), "invalid_type"),
        };
        let formatted = if self.trim {
            text.trim().to_string()
        } else {
            text
        };
        let length = formatted.chars().count();

        let min = self.effective_min();
        if length < min {
            return failed_with_code(format!("{}'s length must >= {}", field, min), "length_min");
        }

        if let Some(max) = self.max {
            if length > max {
                return failed_with_code(format!("{}'s length must <= {}", field, max), "length_max");
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(&formatted) {
                return failed_with_code(
                    format!("{} does not match the pattern.", field),
                    "pattern_mismatch",
                );
            }
        }

        if let Some(allowed) = &self.allowed {
            if !allowed.iter().any(|candidate| *candidate == formatted) {
                return failed_with_code(
                    format!("{} can only be one of {}.", field, allowed.join(", ")),
                    "not_in_enum",
                );
            }
        }

        Ok(Some(Value::String(formatted)))
    }

    fn base_options(&self) -> &BaseOptions {
        &self.base
    }

    fn rule_name(&self) -> &'static str {
        "string"
    }
}
