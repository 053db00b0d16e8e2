//! Array validators: homogeneous lists and fixed-position tuples

use crate::outcome::{failed_with_code, Outcome};
use crate::traits::{BaseBuilder, SharedValidator, Validator};
use crate::validators::base::{BaseOptions, Presence};
use serde_json::Value;

/// Options for a list whose elements all share one validator
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Validator applied to every element
    pub item: SharedValidator,
    /// Minimum number of elements
    pub min: Option<usize>,
    /// Maximum number of elements
    pub max: Option<usize>,
    /// Collapse value-equal elements after validation (default: false)
    pub unique: bool,
}

impl ListOptions {
    pub fn new(item: SharedValidator) -> Self {
        Self {
            item,
            min: None,
            max: None,
            unique: false,
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

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

/// How the elements of an array are validated
#[derive(Debug, Clone)]
pub enum ArrayMode {
    /// Any number of elements, one validator for all of them
    List(ListOptions),
    /// One validator per position; the array may not be longer than the list
    Tuple(Vec<SharedValidator>),
}

#[derive(Debug, Clone)]
pub struct ArrayValidator {
    pub base: BaseOptions,
    pub mode: ArrayMode,
}

impl ArrayValidator {
    pub fn list(options: ListOptions) -> Self {
        Self {
            base: BaseOptions::new(),
            mode: ArrayMode::List(options),
        }
    }

    pub fn tuple(validators: Vec<SharedValidator>) -> Self {
        Self {
            base: BaseOptions::new(),
            mode: ArrayMode::Tuple(validators),
        }
    }

    fn validate_list(&self, field: &str, items: &[Value], opt: &ListOptions) -> Outcome<Vec<Value>> {
        if let Some(min) = opt.min {
            if items.len() < min {
                return failed_with_code(
                    format!("array {}'s length should >= {}", field, min),
                    "too_few_items",
                );
            }
        }

        if let Some(max) = opt.max {
            if items.len() > max {
                return failed_with_code(
                    format!("array {}'s length should <= {}", field, max),
                    "too_many_items",
                );
            }
        }

        let mut formatted = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let result = opt.item.validate(&format!("{}[{}]", field, index), Some(item))?;
            formatted.push(result.unwrap_or(Value::Null));
        }

        if opt.unique {
            let mut seen: Vec<Value> = Vec::with_capacity(formatted.len());
            for value in formatted {
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
            formatted = seen;
        }

        Ok(formatted)
    }

    fn validate_tuple(&self, field: &str, items: &[Value], validators: &[SharedValidator]) -> Outcome<Vec<Value>> {
        if items.len() > validators.len() {
            return failed_with_code(
                format!("{} should be a tuple with {} items", field, validators.len()),
                "tuple_overflow",
            );
        }

        // walk the validators, not the items: missing trailing positions are absent
        let mut results = Vec::with_capacity(validators.len());
        for (index, validator) in validators.iter().enumerate() {
            results.push(validator.validate(&format!("{}[{}]", field, index), items.get(index))?);
        }

        // trailing absent positions are left out so they read as absent again;
        // an absent position before a present one can only be held as null
        while matches!(results.last(), Some(None)) {
            results.pop();
        }
        Ok(results.into_iter().map(|result| result.unwrap_or(Value::Null)).collect())
    }
}

impl BaseBuilder for ArrayValidator {
    fn base_options_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

impl Validator for ArrayValidator {
    fn validate(&self, field: &str, value: Option<&Value>) -> Outcome<Option<Value>> {
        let value = match self.base.present(field, value)? {
            Presence::Value(value) => value,
            Presence::Skip(early) => return Ok(early),
        };

        let items = match &value {
            Value::Array(items) => items,
            _ => return failed_with_code(format!("{} should be an array", field), "invalid_type"),
        };

        let formatted = match &self.mode {
            ArrayMode::List(opt) => self.validate_list(field, items, opt),
            ArrayMode::Tuple(validators) => self.validate_tuple(field, items, validators),
        };

        match formatted {
            Ok(formatted) => Ok(Some(Value::Array(formatted))),
            Err(failure) => {
                tracing::trace!(field, rule = self.rule_name(), message = %failure.message, "array validation failed");
                Err(failure)
            }
        }
    }

    fn base_options(&self) -> &BaseOptions {
        &self.base
    }

    fn rule_name(&self) -> &'static str {
        match self.mode {
            ArrayMode::List(_) => "array",
            ArrayMode::Tuple(_) => "tuple",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{NumberValidator, StringValidator};
    use serde_json::json;

    fn strings() -> ArrayValidator {
        ArrayValidator::list(ListOptions::new(StringValidator::new().shared()))
    }

    #[test]
    fn test_list_validates_every_element() {
        let validator = strings();
        let value = json!([" a ", "b"]);
        assert_eq!(validator.validate("tags", Some(&value)), Ok(Some(json!(["a", "b"]))));

        let value = json!(["a", 3, "c"]);
        let failure = validator.validate("tags", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "tags[1] must be a string");
    }

    #[test]
    fn test_first_failing_element_wins() {
        let validator = strings();
        let value = json!(["ok", "", 5]);
        let failure = validator.validate("tags", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "tags[1]'s length must >= 1");
    }

    #[test]
    fn test_rejects_non_arrays() {
        let value = json!({"0": "a"});
        let failure = strings().validate("tags", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "tags should be an array");
    }

    #[test]
    fn test_length_bounds_checked_before_elements() {
        let validator = ArrayValidator::list(
            ListOptions::new(StringValidator::new().shared()).min(2).max(3),
        );

        let value = json!([1]);
        let failure = validator.validate("tags", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "array tags's length should >= 2");

        let value = json!(["a", "b", "c", "d"]);
        let failure = validator.validate("tags", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "array tags's length should <= 3");
    }

    #[test]
    fn test_unique_collapses_after_validation() {
        let validator = ArrayValidator::list(ListOptions::new(StringValidator::new().shared()).unique(true));
        let value = json!(["a", " a", "b", "a"]);
        assert_eq!(validator.validate("tags", Some(&value)), Ok(Some(json!(["a", "b"]))));

        let validator = ArrayValidator::list(ListOptions::new(NumberValidator::new().shared()).unique(true));
        let value = json!([1, "1", 2]);
        assert_eq!(validator.validate("ids", Some(&value)), Ok(Some(json!([1, 2]))));
    }

    #[test]
    fn test_tuple_positions() {
        let validator = ArrayValidator::tuple(vec![
            StringValidator::new().shared(),
            NumberValidator::new().shared(),
        ]);

        let value = json!(["x", "2"]);
        assert_eq!(validator.validate("pair", Some(&value)), Ok(Some(json!(["x", 2]))));

        let value = json!(["x"]);
        let failure = validator.validate("pair", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "pair[1] is required");

        let value = json!(["x", 1, true]);
        let failure = validator.validate("pair", Some(&value)).unwrap_err();
        assert_eq!(failure.message, "pair should be a tuple with 2 items");
        assert_eq!(failure.code_str(), Some("tuple_overflow"));
    }

    #[test]
    fn test_tuple_missing_positions_use_position_rules() {
        let validator = ArrayValidator::tuple(vec![
            StringValidator::new().shared(),
            NumberValidator::new().default_value(0).shared(),
            StringValidator::new().optional().shared(),
        ]);

        let value = json!(["x"]);
        assert_eq!(validator.validate("row", Some(&value)), Ok(Some(json!(["x", 0]))));
    }

    #[test]
    fn test_tuple_output_validates_again() {
        let validator = ArrayValidator::tuple(vec![
            StringValidator::new().shared(),
            StringValidator::new().optional().shared(),
        ]);

        let output = validator.validate("t", Some(&json!(["x"]))).unwrap().unwrap();
        assert_eq!(output, json!(["x"]));
        assert_eq!(validator.validate("t", Some(&output)), Ok(Some(output.clone())));
    }

    #[test]
    fn test_tuple_absent_position_before_present_one_is_null() {
        let validator = ArrayValidator::tuple(vec![
            StringValidator::new().shared(),
            StringValidator::new().optional().shared(),
            NumberValidator::new().default_value(0).shared(),
        ]);

        let output = validator.validate("row", Some(&json!(["x"]))).unwrap().unwrap();
        assert_eq!(output, json!(["x", null, 0]));

        // the held null is a value on the next run and needs a nullable position
        let failure = validator.validate("row", Some(&output)).unwrap_err();
        assert_eq!(failure.message, "row[1] cannot be null");
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(strings().rule_name(), "array");
        assert_eq!(ArrayValidator::tuple(vec![]).rule_name(), "tuple");
    }
}
