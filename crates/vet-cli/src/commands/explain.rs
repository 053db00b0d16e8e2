use super::load_validator;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Print the compiled validator tree
pub fn run(schema: &Path, out: &mut impl Write) -> Result<()> {
    let validator = load_validator(schema)?;
    writeln!(out, "{:#?}", validator)?;
    Ok(())
}
