//! Error types for the check

use thiserror::Error;

/// Result type alias for the check
pub type Result<T> = std::result::Result<T, CheckError>;

/// Main error type for the check
///
/// Every variant is terminal for the invocation and is reported as CRITICAL.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Mutually exclusive options were set together
    #[error("{0}")]
    Config(String),

    /// The configured endpoint looks like a URL but cannot be parsed
    #[error("Failed to parse consul server URL {url}: {reason}")]
    TargetUrl { url: String, reason: String },

    /// The registry client cannot be built from the resolved configuration
    #[error("Failed to create Consul client: {0}")]
    ClientConstruction(String),

    /// The single outbound query failed
    #[error("Failed to get {target}: {source}")]
    Retrieval {
        target: String,
        #[source]
        source: RegistryError,
    },
}

/// Failures talking to the registry HTTP API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("unexpected response status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },
}
