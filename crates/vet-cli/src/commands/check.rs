use super::load_validator;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use vet_validation::{Failure, SharedValidator, Validator};

/// Options for `vet check`
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub schema: PathBuf,
    /// Field name used as the root of failure paths
    pub field: String,
    /// Treat every non-blank line of an input as its own document
    pub ndjson: bool,
    pub pretty: bool,
    /// Write failures as JSON objects instead of plain messages
    pub json: bool,
    /// Input files; `-` reads stdin
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Validate every input document, writing canonical output to `out` and
/// failures to `err`
pub async fn run(args: &CheckArgs, out: &mut impl Write, err: &mut impl Write) -> Result<Report> {
    let validator = load_validator(&args.schema)?;
    let mut report = Report::default();

    for input in &args.inputs {
        let text = read_input(input).await?;
        let label = input.display().to_string();

        if args.ndjson {
            for (index, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let label = format!("{}:{}", label, index + 1);
                let passed = check_document(&validator, args, &label, line, out, err)?;
                report.record(passed);
            }
        } else {
            let passed = check_document(&validator, args, &label, &text, out, err)?;
            report.record(passed);
        }
    }

    tracing::debug!(passed = report.passed, failed = report.failed, "check finished");
    Ok(report)
}

async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("failed to read stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read input {}", path.display()))
}

/// Validate one JSON document; returns whether it passed
fn check_document(
    validator: &SharedValidator,
    args: &CheckArgs,
    label: &str,
    text: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            let failure = Failure::with_code(format!("invalid JSON: {}", e), "invalid_json");
            report_failure(args, label, &failure, err)?;
            return Ok(false);
        }
    };

    match validator.validate(&args.field, Some(&value)) {
        Ok(output) => {
            let output = output.unwrap_or(Value::Null);
            let rendered = if args.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            writeln!(out, "{}", rendered)?;
            Ok(true)
        }
        Err(failure) => {
            report_failure(args, label, &failure, err)?;
            Ok(false)
        }
    }
}

fn report_failure(args: &CheckArgs, label: &str, failure: &Failure, err: &mut impl Write) -> Result<()> {
    if args.json {
        let mut body = failure.to_json();
        body["input"] = Value::from(label);
        writeln!(err, "{}", serde_json::to_string(&body)?)?;
    } else {
        writeln!(err, "{}: {}", label, failure)?;
    }
    Ok(())
}
