//! Declarative schema documents compiled into validator trees
//!
//! A schema is a `type`-tagged JSON or YAML document:
//!
//! ```yaml
//! type: struct
//! fields:
//!   name: { type: string, max: 50 }
//!   age: { type: number, min: 0, max: 120 }
//!   tags: { type: array, item: { type: string }, unique: true, required: false }
//! ```

use crate::error::SchemaError;
use crate::traits::{SharedValidator, Validator};
use crate::validators::*;
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// Presence keys accepted by every schema node
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceSchema {
    #[serde(default)]
    pub nullable: bool,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub default: Option<Value>,
}

impl PresenceSchema {
    fn to_options(&self) -> BaseOptions {
        BaseOptions {
            nullable: self.nullable,
            required: self.required,
            default: self.default.clone(),
        }
    }
}

/// Kind-specific part of a schema node
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaKind {
    Any,
    String {
        min: Option<usize>,
        max: Option<usize>,
        #[serde(default = "default_true")]
        trim: bool,
        pattern: Option<String>,
        #[serde(rename = "enum")]
        allowed: Option<Vec<String>>,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        #[serde(default)]
        float: bool,
        #[serde(rename = "enum")]
        allowed: Option<Vec<f64>>,
    },
    Boolean,
    Array {
        item: Box<Schema>,
        min: Option<usize>,
        max: Option<usize>,
        #[serde(default)]
        unique: bool,
    },
    Tuple {
        items: Vec<Schema>,
    },
    Struct {
        fields: IndexMap<String, Schema>,
    },
    Record {
        value: Box<Schema>,
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// One node of a schema document
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    #[serde(flatten)]
    pub presence: PresenceSchema,
    #[serde(flatten)]
    pub kind: SchemaKind,
}

impl Schema {
    /// Parse a JSON schema document
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a YAML schema document
    pub fn from_yaml_str(source: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Read a schema file; `.yaml`/`.yml` files are YAML, anything else JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            _ => Self::from_json_str(&source),
        }
    }

    /// Compile into a validator tree
    pub fn build(&self) -> Result<SharedValidator, SchemaError> {
        let validator = self.build_at("$")?;
        tracing::debug!(rule = validator.rule_name(), "compiled schema into validator tree");
        Ok(validator)
    }

    fn build_at(&self, path: &str) -> Result<SharedValidator, SchemaError> {
        let base = self.presence.to_options();

        let validator = match &self.kind {
            SchemaKind::Any => AnyValidator { base }.shared(),
            SchemaKind::String {
                min,
                max,
                trim,
                pattern,
                allowed,
            } => {
                check_bounds(path, *min, *max)?;
                let mut validator = StringValidator::new().trim(*trim);
                validator.base = base;
                validator.min = *min;
                validator.max = *max;
                if let Some(pattern) = pattern {
                    let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
                        path: path.to_string(),
                        source,
                    })?;
                    validator = validator.pattern(regex);
                }
                if let Some(allowed) = allowed {
                    validator = validator.one_of(allowed.iter().cloned());
                }
                validator.shared()
            }
            SchemaKind::Number {
                min,
                max,
                float,
                allowed,
            } => {
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(invalid(path, format!("min {} is greater than max {}", min, max)));
                    }
                }
                let mut validator = NumberValidator::new().float(*float);
                validator.base = base;
                validator.min = *min;
                validator.max = *max;
                validator.allowed = allowed.clone();
                validator.shared()
            }
            SchemaKind::Boolean => BooleanValidator { base }.shared(),
            SchemaKind::Array {
                item,
                min,
                max,
                unique,
            } => {
                check_bounds(path, *min, *max)?;
                let item = item.build_at(&format!("{}.item", path))?;
                let options = ListOptions {
                    item,
                    min: *min,
                    max: *max,
                    unique: *unique,
                };
                ArrayValidator {
                    base,
                    mode: ArrayMode::List(options),
                }
                .shared()
            }
            SchemaKind::Tuple { items } => {
                let validators = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| item.build_at(&format!("{}.items[{}]", path, index)))
                    .collect::<Result<Vec<_>, _>>()?;
                ArrayValidator {
                    base,
                    mode: ArrayMode::Tuple(validators),
                }
                .shared()
            }
            SchemaKind::Struct { fields } => {
                let fields = fields
                    .iter()
                    .map(|(key, schema)| {
                        let validator = schema.build_at(&format!("{}.fields.{}", path, key))?;
                        Ok((key.clone(), validator))
                    })
                    .collect::<Result<Vec<_>, SchemaError>>()?;
                ObjectValidator {
                    base,
                    mode: ObjectMode::Struct(fields),
                }
                .shared()
            }
            SchemaKind::Record { value, min, max } => {
                check_bounds(path, *min, *max)?;
                let record = value.build_at(&format!("{}.value", path))?;
                ObjectValidator {
                    base,
                    mode: ObjectMode::Record(RecordOptions {
                        record,
                        min: *min,
                        max: *max,
                    }),
                }
                .shared()
            }
        };

        Ok(validator)
    }
}

fn invalid(path: &str, reason: String) -> SchemaError {
    SchemaError::Invalid {
        path: path.to_string(),
        reason,
    }
}

fn check_bounds(path: &str, min: Option<usize>, max: Option<usize>) -> Result<(), SchemaError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => {
            Err(invalid(path, format!("min {} is greater than max {}", min, max)))
        }
        _ => Ok(()),
    }
}
