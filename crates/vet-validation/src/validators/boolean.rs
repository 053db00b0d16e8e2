//! Boolean validator with coercion of common truthy/falsy words

use crate::outcome::{failed_with_code, Outcome};
use crate::traits::{BaseBuilder, Validator};
use crate::validators::base::{BaseOptions, Presence};
use serde_json::Value;

const TRUE_WORDS: [&str; 4] = ["1", "true", "on", "yes"];
const FALSE_WORDS: [&str; 4] = ["0", "false", "off", "no"];

#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    pub base: BaseOptions,
}

impl BooleanValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn coerce(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => {
                let word = text.trim().to_lowercase();
                if TRUE_WORDS.contains(&word.as_str()) {
                    Some(true)
                } else if FALSE_WORDS.contains(&word.as_str()) {
                    Some(false)
                } else {
                    None
                }
            }
            Value::Number(num) => match num.as_f64() {
                Some(n) if n == 1.0 => Some(true),
                Some(n) if n == 0.0 => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl BaseBuilder for BooleanValidator {
    fn base_options_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

impl Validator for BooleanValidator {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        let value = match self.base.present(field, value)? {
            Presence::Value(value) => value,
            Presence::Skip(early) => return Ok(early),
        };

        match Self::coerce(&value) {
            Some(flag) => Ok(Some(Value::Bool(flag))),
            None => failed_with_code(format!("{} must be true or false", field), "invalid_boolean"),
        }
    }

    fn base_options(&self) -> &BaseOptions {
        &self.base
    }

    fn rule_name(&self) -> &'static str {
        "boolean"
    }
}
