//! Configuration management for the check
//!
//! This module handles building and validating the check configuration from
//! command line arguments and environment variables.

pub mod cli;
pub mod endpoint;
pub mod models;
pub mod validation;

pub use cli::CheckArgs;
pub use endpoint::{ConsulEndpoint, Scheme};
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{CheckError, Result};
use tracing::debug;

/// Main configuration struct for the check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// What to query
    pub target: TargetSpec,
    /// How to reach the registry
    pub connection: ConnectionConfig,
}

impl Config {
    pub fn new(target: TargetSpec, connection: ConnectionConfig) -> Self {
        Self { target, connection }
    }

    /// Build configuration from parsed arguments
    pub fn from_args(args: &CheckArgs) -> Self {
        Self::new(args.target_spec(), args.connection())
    }

    /// Validate the configuration before any network access
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.target).map_err(CheckError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Resolve the registry endpoint from the server option
    pub fn endpoint(&self) -> Result<ConsulEndpoint> {
        ConsulEndpoint::resolve(&self.connection.server)
    }
}
