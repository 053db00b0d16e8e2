//! # vet-validation
//!
//! Composable validators for JSON-like values. A tree of validators is built
//! once (through [`factories`] or a [`schema::Schema`] document) and then run
//! many times; every run returns either the canonical form of the input or a
//! single [`Failure`] whose message names the offending field path.

pub mod error;
pub mod factories;
pub mod outcome;
pub mod schema;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use error::{Failure, FailureCode, SchemaError};
pub use outcome::{failed, failed_with_code, map_success, map_success_async, success, Outcome};
pub use schema::Schema;
pub use traits::{BaseBuilder, SharedValidator, Validator};

// Built-in validators
pub use validators::{
    parse_float_prefix, AnyValidator, ArrayMode, ArrayValidator, BaseOptions, BooleanValidator,
    ListOptions, NumberValidator, ObjectMode, ObjectValidator, RecordOptions, StringValidator,
};
