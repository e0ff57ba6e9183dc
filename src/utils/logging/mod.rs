//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! check result lines read by the monitoring pipeline.

use tracing_subscriber::EnvFilter;

/// Fallback filter when the configured directive does not parse
pub const DEFAULT_FILTER: &str = "warn";

/// Output format for stderr diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Parse a filter directive, falling back to [`DEFAULT_FILTER`]
pub fn build_filter(directive: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_FILTER), false),
    }
}

/// Install the global subscriber. Returns false if one was already set.
pub fn init_logging(directive: &str, format: LogFormat) -> bool {
    let (filter, valid) = build_filter(directive);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed && !valid {
        tracing::warn!(directive, "invalid log filter, using {}", DEFAULT_FILTER);
    }
    installed
}
