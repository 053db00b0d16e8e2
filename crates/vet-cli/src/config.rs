use vet_core::{ConfigSource, EnvReader};

pub const LOG_KEY: &str = "VET_LOG";
pub const PRETTY_KEY: &str = "VET_PRETTY";

/// Settings the binary picks up from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// `tracing` filter directive
    pub log_filter: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            pretty: false,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_reader(&EnvReader::new())
    }

    pub fn from_reader(reader: &EnvReader) -> Self {
        let defaults = Self::default();
        Self {
            log_filter: reader.get(LOG_KEY, defaults.log_filter),
            pretty: reader.get(PRETTY_KEY, defaults.pretty),
        }
    }

    /// Where the log filter came from, reported once logging is up
    pub fn log_source(reader: &EnvReader) -> ConfigSource {
        reader.source(LOG_KEY)
    }
}
