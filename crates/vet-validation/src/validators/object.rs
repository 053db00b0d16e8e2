//! Object validators: fixed structs and arbitrary-keyed records

use crate::outcome::{failed_with_code, Outcome};
use crate::traits::{BaseBuilder, SharedValidator, Validator};
use crate::validators::base::{BaseOptions, Presence};
use serde_json::{Map, Value};

/// Options for an object whose every value shares one validator
#[derive(Debug, Clone)]
pub struct RecordOptions {
    /// Validator applied to every value
    pub record: SharedValidator,
    /// Minimum number of entries in the output
    pub min: Option<usize>,
    /// Maximum number of entries in the output
    pub max: Option<usize>,
}

impl RecordOptions {
    pub fn new(record: SharedValidator) -> Self {
        Self {
            record,
            min: None,
            max: None,
        }
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

/// How the entries of an object are validated
#[derive(Debug, Clone)]
pub enum ObjectMode {
    /// Declared keys in declaration order; undeclared keys are dropped
    Struct(Vec<(String, SharedValidator)>),
    /// Arbitrary keys, one validator for every value
    Record(RecordOptions),
}

#[derive(Debug, Clone)]
pub struct ObjectValidator {
    pub base: BaseOptions,
    pub mode: ObjectMode,
}

impl ObjectValidator {
    pub fn structure<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SharedValidator)>,
        K: Into<String>,
    {
        Self {
            base: BaseOptions::new(),
            mode: ObjectMode::Struct(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn record(options: RecordOptions) -> Self {
        Self {
            base: BaseOptions::new(),
            mode: ObjectMode::Record(options),
        }
    }

    /// Get the declared struct keys, in order
    pub fn field_names(&self) -> Vec<&str> {
        match &self.mode {
            ObjectMode::Struct(fields) => fields.iter().map(|(k, _)| k.as_str()).collect(),
            ObjectMode::Record(_) => Vec::new(),
        }
    }

    fn validate_struct(
        &self,
        field: &str,
        object: &Map<String, Value>,
        fields: &[(String, SharedValidator)],
    ) -> Outcome<Map<String, Value>> {
        let mut formatted = Map::new();
        for (key, validator) in fields {
            let result = validator.validate(&format!("{}[\"{}\"]", field, key), object.get(key))?;
            if let Some(value) = result {
                formatted.insert(key.clone(), value);
            }
        }
        Ok(formatted)
    }

    fn validate_record(
        &self,
        field: &str,
        object: &Map<String, Value>,
        opt: &RecordOptions,
    ) -> Outcome<Map<String, Value>> {
        // every key of a decoded map carries a value, so the record validator
        // never sees an absent input here
        let mut formatted = Map::new();
        for (key, item) in object {
            let result = opt.record.validate(&format!("{}[\"{}\"]", field, key), Some(item))?;
            if let Some(value) = result {
                formatted.insert(key.clone(), value);
            }
        }

        let size = formatted.len();
        if let Some(min) = opt.min {
            if size < min {
                return failed_with_code(format!("size of {} should >= {}", field, min), "too_few_entries");
            }
        }
        if let Some(max) = opt.max {
            if size > max {
                return failed_with_code(format!("size of {} should <= {}", field, max), "too_many_entries");
            }
        }

        Ok(formatted)
    }
}

impl BaseBuilder for ObjectValidator {
    fn base_options_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

impl Validator for ObjectValidator {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        let value = match self.base.present(field, value)? {
            Presence::Value(value) => value,
            Presence::Skip(early) => return Ok(early),
        };

        let object = match &value {
            Value::Object(object) => object,
            _ => return failed_with_code(format!("{} should be a plain object", field), "invalid_type"),
        };

        let formatted = match &self.mode {
            ObjectMode::Struct(fields) => self.validate_struct(field, object, fields),
            ObjectMode::Record(opt) => self.validate_record(field, object, opt),
        };

        match formatted {
            Ok(formatted) => Ok(Some(Value::Object(formatted))),
            Err(failure) => {
                tracing::trace!(field, rule = self.rule_name(), message = %failure.message, "object validation failed");
                Err(failure)
            }
        }
    }

    fn base_options(&self) -> &BaseOptions {
        &self.base
    }

    fn rule_name(&self) -> &'static str {
        match self.mode {
            ObjectMode::Struct(_) => "struct",
            ObjectMode::Record(_) => "record",
        }
    }
}
