//! Shortcuts for assembling validator trees
//!
//! ```
//! use vet_validation::factories::*;
//! use vet_validation::{BaseBuilder, Validator};
//! use serde_json::json;
//!
//! let user = structure([
//!     ("name", string().max(50).shared()),
//!     ("age", number().range(0.0, 120.0).shared()),
//!     ("tags", array(string()).optional().shared()),
//! ]);
//!
//! let value = json!({"name": " Amy ", "age": "30"});
//! assert_eq!(user.validate("user", Some(&value)), Ok(Some(json!({"name": "Amy", "age": 30}))));
//! ```

use crate::traits::{SharedValidator, Validator};
use crate::validators::*;

/// Only the presence checks, no format checks
pub fn any() -> AnyValidator {
    AnyValidator::new()
}

pub fn string() -> StringValidator {
    StringValidator::new()
}

pub fn number() -> NumberValidator {
    NumberValidator::new()
}

pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

/// List whose elements are all checked by `item`
pub fn array<V: Validator + 'static>(item: V) -> ArrayValidator {
    ArrayValidator::list(ListOptions::new(item.shared()))
}

/// List with explicit bounds or uniqueness
pub fn array_with(options: ListOptions) -> ArrayValidator {
    ArrayValidator::list(options)
}

/// Fixed positions, one validator each
pub fn tuple(validators: Vec<SharedValidator>) -> ArrayValidator {
    ArrayValidator::tuple(validators)
}

/// Object with declared keys, checked in the given order
pub fn structure<I, K>(fields: I) -> ObjectValidator
where
    I: IntoIterator<Item = (K, SharedValidator)>,
    K: Into<String>,
{
    ObjectValidator::structure(fields)
}

/// Object with arbitrary keys whose values are all checked by `value`
pub fn record<V: Validator + 'static>(value: V) -> ObjectValidator {
    ObjectValidator::record(RecordOptions::new(value.shared()))
}

/// Record with entry-count bounds
pub fn record_with(options: RecordOptions) -> ObjectValidator {
    ObjectValidator::record(options)
}
