//! Built-in validators

pub mod array;
pub mod base;
pub mod boolean;
pub mod number;
pub mod object;
pub mod string;

pub use array::{ArrayMode, ArrayValidator, ListOptions};
pub use base::{AnyValidator, BaseOptions};
pub use boolean::BooleanValidator;
pub use number::{parse_float_prefix, NumberValidator};
pub use object::{ObjectMode, ObjectValidator, RecordOptions};
pub use string::StringValidator;
