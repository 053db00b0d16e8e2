pub mod check;
pub mod explain;

use anyhow::{Context, Result};
use std::path::Path;
use vet_validation::{Schema, SharedValidator};

/// Load and compile a schema file
pub fn load_validator(path: &Path) -> Result<SharedValidator> {
    let schema = Schema::from_path(path)?;
    schema
        .build()
        .with_context(|| format!("failed to compile schema {}", path.display()))
}
