//! Registry connection configuration

use std::path::PathBuf;
use std::time::Duration;

/// Connection parameters for the registry client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Endpoint URL or bare `host[:port]`
    pub server: String,
    /// ACL token
    pub token: Option<String>,
    /// PEM CA bundle, honoured for https only
    pub trusted_ca_file: Option<PathBuf>,
    /// Skip TLS verification, honoured for https only
    pub insecure_skip_verify: bool,
    /// Transport timeout for the single request
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            server: super::default_consul_server(),
            token: None,
            trusted_ca_file: None,
            insecure_skip_verify: false,
            timeout: Duration::from_secs(super::default_timeout()),
        }
    }
}
