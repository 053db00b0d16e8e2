//! Numeric value validator

use crate::outcome::{failed_with_code, Outcome};
use crate::traits::{BaseBuilder, Validator};
use crate::validators::base::{BaseOptions, Presence};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("float prefix pattern")
});

/// Validator for numeric values. Numeric strings are coerced.
#[derive(Debug, Clone)]
pub struct NumberValidator {
    pub base: BaseOptions,
    /// Minimum value (inclusive)
    pub min: Option<f64>,
    /// Maximum value (inclusive)
    pub max: Option<f64>,
    /// Allow a fractional part (default: false)
    pub float: bool,
    /// Allowed values
    pub allowed: Option<Vec<f64>>,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self {
            base: BaseOptions::new(),
            min: None,
            max: None,
            float: false,
            allowed: None,
        }
    }

    /// Set minimum value constraint
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value constraint
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set value range (min and max)
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Allow values with a fractional part
    pub fn float(mut self, float: bool) -> Self {
        self.float = float;
        self
    }

    /// Restrict the value to an allow-list
    pub fn one_of(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.allowed = Some(values.into_iter().collect());
        self
    }

    /// Extract a number, parsing the leading numeric part of strings
    fn get_numeric_value(value: &Value) -> Option<f64> {
        match value {
            Value::Number(num) => num.as_f64(),
            Value::String(s) => parse_float_prefix(s),
            _ => None,
        }
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseBuilder for NumberValidator {
    fn base_options_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

impl Validator for NumberValidator {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        let value = match self.base.present(field, value)? {
            Presence::Value(value) => value,
            Presence::Skip(early) => return Ok(early),
        };

        let num = match Self::get_numeric_value(&value) {
            Some(num) if num.is_finite() => num,
            _ => {
                return failed_with_code(
                    format!("{} must be a valid number", field),
                    "invalid_number",
                )
            }
        };

        if let Some(allowed) = &self.allowed {
            if !allowed.contains(&num) {
                let listed: Vec<String> = allowed.iter().map(|n| n.to_string()).collect();
                return failed_with_code(
                    format!("{} can only be one of {}.", field, listed.join(", ")),
                    "not_in_enum",
                );
            }
        }

        if !self.float && num % 1.0 != 0.0 {
            return failed_with_code(format!("{} must be a integer", field), "not_integer");
        }

        if let Some(min) = self.min {
            if num < min {
                return failed_with_code(format!("{} must >= {}", field, min), "below_minimum");
            }
        }

        if let Some(max) = self.max {
            if num > max {
                return failed_with_code(format!("{} must <= {}", field, max), "above_maximum");
            }
        }

        Ok(Some(to_json_number(num)))
    }

    fn base_options(&self) -> &BaseOptions {
        &self.base
    }

    fn rule_name(&self) -> &'static str {
        "number"
    }
}

/// Parse the leading numeric part of a string, ignoring leading whitespace
/// and any trailing text (`"42px"` gives 42).
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    FLOAT_PREFIX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Integral values become JSON integers so that coerced and native numbers compare equal
fn to_json_number(num: f64) -> Value {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if num.fract() == 0.0 && num >= -I64_BOUND && num < I64_BOUND {
        Value::Number(Number::from(num as i64))
    } else {
        Number::from_f64(num).map(Value::Number).unwrap_or(Value::Null)
    }
}
