mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::check::CheckArgs;
use config::CliConfig;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vet_core::EnvReader;

#[derive(Parser)]
#[command(name = "vet")]
#[command(about = "Validate and normalize JSON documents against a schema")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate input documents and print their canonical form
    Check {
        /// Schema file (.json, .yaml or .yml)
        #[arg(long)]
        schema: PathBuf,

        /// Name of the root field in failure messages
        #[arg(long, default_value = "input")]
        field: String,

        /// Every line of an input is a separate document
        #[arg(long)]
        ndjson: bool,

        /// Pretty-print output JSON
        #[arg(long)]
        pretty: bool,

        /// Report failures as JSON objects on stderr
        #[arg(long)]
        json: bool,

        /// Input files, `-` for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show the validator tree compiled from a schema
    Explain {
        /// Schema file (.json, .yaml or .yml)
        #[arg(long)]
        schema: PathBuf,
    },
}

fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let reader = EnvReader::new();
    let config = CliConfig::from_reader(&reader);
    init_logging(&config.log_filter)?;
    tracing::debug!(
        filter = %config.log_filter,
        source = %CliConfig::log_source(&reader),
        "logging initialized"
    );

    match cli.command {
        Commands::Check {
            schema,
            field,
            ndjson,
            pretty,
            json,
            inputs,
        } => {
            let args = CheckArgs {
                schema,
                field,
                ndjson,
                pretty: pretty || config.pretty,
                json,
                inputs,
            };
            let report = commands::check::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock()).await?;
            if !report.success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Explain { schema } => {
            commands::explain::run(&schema, &mut io::stdout().lock())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["vet", "check", "--schema", "user.yaml", "--ndjson", "--json", "a.ndjson", "-"]).unwrap();
        match cli.command {
            Commands::Check {
                schema,
                field,
                ndjson,
                pretty,
                json,
                inputs,
            } => {
                assert_eq!(schema, PathBuf::from("user.yaml"));
                assert_eq!(field, "input");
                assert!(ndjson);
                assert!(!pretty);
                assert!(json);
                assert_eq!(inputs, vec![PathBuf::from("a.ndjson"), PathBuf::from("-")]);
            }
            Commands::Explain { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn test_check_needs_inputs() {
        assert!(Cli::try_parse_from(["vet", "check", "--schema", "user.yaml"]).is_err());
    }
}
