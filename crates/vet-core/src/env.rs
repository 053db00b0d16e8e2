//! Typed environment lookup with fallbacks

use crate::text::safe_parse_int;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a looked-up value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value supplied programmatically to the reader
    Overlay(String),
    /// Value loaded from a process environment variable
    EnvVar(String),
    /// Fallback used because the key is not set anywhere
    Default,
}

impl ConfigSource {
    pub fn is_env_var(&self) -> bool {
        matches!(self, ConfigSource::EnvVar(_))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default)
    }

    /// Get source description
    pub fn description(&self) -> String {
        match self {
            ConfigSource::Overlay(key) => format!("Overlay value: {}", key),
            ConfigSource::EnvVar(var) => format!("Environment variable: {}", var),
            ConfigSource::Default => "Default value".to_string(),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EnvError {
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },

    #[error("Invalid value for {var}: '{value}', expected {expected}")]
    InvalidValue {
        var: String,
        value: String,
        expected: String,
    },
}

/// Types that can be read from a raw environment string, falling back to a
/// default when the string does not make sense for the type
pub trait FromEnv: Sized {
    fn from_env(raw: &str, default: Self) -> Self;
}

impl FromEnv for String {
    fn from_env(raw: &str, _default: Self) -> Self {
        raw.to_string()
    }
}

/// Only `1` and `true` (trimmed, any case) are true; everything else is false
impl FromEnv for bool {
    fn from_env(raw: &str, _default: Self) -> Self {
        matches!(raw.trim().to_lowercase().as_str(), "1" | "true")
    }
}

macro_rules! impl_from_env_int {
    ($($ty:ty),*) => {
        $(
            impl FromEnv for $ty {
                fn from_env(raw: &str, default: Self) -> Self {
                    safe_parse_int(raw, None, 10)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .unwrap_or(default)
                }
            }
        )*
    };
}

impl_from_env_int!(i32, i64, u16, u32, u64, usize);

/// Reads configuration from an overlay map first, then the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvReader {
    overlay: HashMap<String, String>,
}

impl EnvReader {
    /// Reader backed by the process environment only
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader whose overlay values take precedence over the process environment
    pub fn with_overlay<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overlay: values.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Set an overlay value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overlay.insert(key.into(), value.into());
    }

    /// Raw value and its source, if the key is set anywhere
    pub fn lookup(&self, key: &str) -> Option<(String, ConfigSource)> {
        if let Some(value) = self.overlay.get(key) {
            return Some((value.clone(), ConfigSource::Overlay(key.to_string())));
        }
        env::var(key)
            .ok()
            .map(|value| (value, ConfigSource::EnvVar(key.to_string())))
    }

    /// Where `key` would be read from
    pub fn source(&self, key: &str) -> ConfigSource {
        self.lookup(key)
            .map(|(_, source)| source)
            .unwrap_or(ConfigSource::Default)
    }

    /// Typed value of `key`, or `default` when unset (or not parseable, for numbers)
    pub fn get<T: FromEnv>(&self, key: &str, default: T) -> T {
        match self.lookup(key) {
            Some((raw, _)) => T::from_env(&raw, default),
            None => {
                tracing::debug!(key, "environment key not set, using default");
                default
            }
        }
    }

    /// Strictly parsed value of a key that must be set
    pub fn require<T: FromStr>(&self, key: &str, expected: &str) -> Result<T, EnvError> {
        let (raw, _) = self.lookup(key).ok_or_else(|| EnvError::MissingEnvVar {
            var: key.to_string(),
        })?;
        raw.trim().parse().map_err(|_| EnvError::InvalidValue {
            var: key.to_string(),
            value: raw.clone(),
            expected: expected.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_overlay_values() {
        let reader = EnvReader::with_overlay([
            ("VET_TEST_NAME", "vet"),
            ("VET_TEST_PORT", "8080abc"),
            ("VET_TEST_DEBUG", " TRUE "),
            ("VET_TEST_BAD_PORT", "eighty"),
        ]);

        assert_eq!(reader.get("VET_TEST_NAME", "fallback".to_string()), "vet");
        assert_eq!(reader.get("VET_TEST_PORT", 3000u16), 8080);
        assert!(reader.get("VET_TEST_DEBUG", false));
        assert_eq!(reader.get("VET_TEST_BAD_PORT", 3000u16), 3000);
        assert_eq!(
            reader.source("VET_TEST_NAME"),
            ConfigSource::Overlay("VET_TEST_NAME".to_string())
        );
    }

    #[test]
    fn test_bool_words() {
        let mut reader = EnvReader::new();
        reader.set("VET_TEST_FLAG", "yes");
        // only 1/true are recognised, even if the default is true
        assert!(!reader.get("VET_TEST_FLAG", true));

        reader.set("VET_TEST_FLAG", "1");
        assert!(reader.get("VET_TEST_FLAG", false));
    }

    #[test]
    fn test_out_of_range_numbers_fall_back() {
        let reader = EnvReader::with_overlay([("VET_TEST_SMALL", "-5")]);
        assert_eq!(reader.get("VET_TEST_SMALL", 7u32), 7);
        assert_eq!(reader.get("VET_TEST_SMALL", 7i32), -5);
    }

    #[test]
    #[serial]
    fn test_process_environment() {
        env::set_var("VET_TEST_FROM_ENV", "42");
        let reader = EnvReader::new();
        assert_eq!(reader.get("VET_TEST_FROM_ENV", 0i64), 42);
        assert!(reader.source("VET_TEST_FROM_ENV").is_env_var());

        let reader = EnvReader::with_overlay([("VET_TEST_FROM_ENV", "7")]);
        assert_eq!(reader.get("VET_TEST_FROM_ENV", 0i64), 7);
        env::remove_var("VET_TEST_FROM_ENV");
    }

    #[test]
    #[serial]
    fn test_missing_key_uses_default() {
        env::remove_var("VET_TEST_MISSING");
        let reader = EnvReader::new();
        assert_eq!(reader.get("VET_TEST_MISSING", "warn".to_string()), "warn");
        assert!(reader.source("VET_TEST_MISSING").is_default());
    }

    #[test]
    #[serial]
    fn test_require() {
        env::remove_var("VET_TEST_REQUIRED");
        let reader = EnvReader::with_overlay([("VET_TEST_RATIO", "0.75"), ("VET_TEST_BROKEN", "x")]);

        assert_eq!(reader.require::<f64>("VET_TEST_RATIO", "a ratio"), Ok(0.75));
        assert_eq!(
            reader.require::<u8>("VET_TEST_REQUIRED", "a number"),
            Err(EnvError::MissingEnvVar {
                var: "VET_TEST_REQUIRED".to_string()
            })
        );

        let err = reader.require::<u8>("VET_TEST_BROKEN", "a number").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for VET_TEST_BROKEN: 'x', expected a number");
    }
}
