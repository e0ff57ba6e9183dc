//! # sensu-consul-check
//!
//! Monitoring check that asks a Consul agent for the health checks of a
//! service, a node or the whole fleet and reduces them to a single
//! OK / WARNING / CRITICAL verdict with human readable diagnostic lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sensu_consul_check::{Config, ConnectionConfig, TargetSpec};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let target = TargetSpec::new().with_service("web").with_tags(["blue"]);
//!     let config = Config::new(target, ConnectionConfig::default());
//!
//!     let verdict = sensu_consul_check::run(&config).await;
//!     for line in verdict.lines(sensu_consul_check::NAME) {
//!         println!("{}", line);
//!     }
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{CheckArgs, Config, ConnectionConfig, ConsulEndpoint, TargetSpec};
pub use crate::core::consul::ConsulClient;
pub use crate::core::health::{
    CheckStatus, Diagnostic, HealthCheckRecord, QueryMode, Severity, Verdict,
};
pub use crate::core::traits::HealthQueryClient;
pub use crate::core::{run, run_with_client};
pub use utils::error::{CheckError, RegistryError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate, also the prefix of every output line
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Version string printed by `--version`: git commit and compiler
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", ",
    env!("RUST_VERSION"),
    ")"
);

/// Exit code for invocations that never reached evaluation (bad arguments)
pub const UNKNOWN_EXIT_CODE: u8 = 3;
