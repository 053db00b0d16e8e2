//! # vet-core
//!
//! Support code shared by the vet crates: typed environment lookup with
//! fallbacks, lenient string parsing and a few time shorthands.

pub mod env;
pub mod text;
pub mod time;

pub use env::{ConfigSource, EnvError, EnvReader, FromEnv};
pub use text::{keyword_compare, numeric_compare, readable_size, safe_parse_float, safe_parse_int, zfill};
