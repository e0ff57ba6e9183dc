//! Command line and environment surface

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use super::models::{ConnectionConfig, TargetSpec};
use crate::utils::logging::LogFormat;

/// Consul Service Health Check
#[derive(Debug, Clone, Parser)]
#[command(name = crate::NAME, version, long_version = crate::LONG_VERSION, about)]
pub struct CheckArgs {
    /// Consul server URL
    #[arg(
        short = 'c',
        long,
        env = "CONSUL_HTTP_ADDR",
        default_value_t = super::models::default_consul_server()
    )]
    pub consul_server: String,

    /// Check all Consul service running on the specified node
    #[arg(short = 'n', long)]
    pub node: Option<String>,

    /// Service managed by Consul to check
    #[arg(short = 's', long, default_value_t = super::models::default_service())]
    pub service: String,

    /// Filter services by a comma-separated list of tags (requires --service)
    #[arg(short = 't', long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Get all services (not compatible with --tags)
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Fail if no service is found
    #[arg(short = 'f', long)]
    pub fail_if_not_found: bool,

    /// Skip TLS certificate verification (not recommended!)
    #[arg(short = 'i', long)]
    pub insecure_skip_verify: bool,

    /// TLS CA certificate bundle in PEM format
    #[arg(short = 'T', long, env = "CONSUL_CACERT")]
    pub trusted_ca_file: Option<PathBuf>,

    /// ACL token for connecting to Consul
    #[arg(short = 'A', long, env = "CONSUL_HTTP_TOKEN", hide_env_values = true)]
    pub acl_token: Option<String>,

    /// Service managed by Consul to exclude from check
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude_service: Vec<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        default_value_t = super::models::default_timeout(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log filter for diagnostics written to stderr
    #[arg(long, env = "CONSUL_CHECK_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format for diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CheckArgs {
    /// Query target described by the arguments
    pub fn target_spec(&self) -> TargetSpec {
        TargetSpec::new()
            .with_node(self.node.clone().unwrap_or_default())
            .with_service(self.service.clone())
            .with_tags(self.tags.iter().cloned())
            .with_all(self.all)
            .excluding(self.exclude_service.iter().filter(|s| !s.is_empty()).cloned())
            .with_fail_if_not_found(self.fail_if_not_found)
    }

    /// Connection parameters described by the arguments
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig {
            server: self.consul_server.clone(),
            token: self.acl_token.clone().filter(|t| !t.is_empty()),
            trusted_ca_file: self
                .trusted_ca_file
                .clone()
                .filter(|path| !path.as_os_str().is_empty()),
            insecure_skip_verify: self.insecure_skip_verify,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
