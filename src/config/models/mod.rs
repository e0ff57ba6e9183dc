//! Configuration data models
//!
//! This module defines the configuration structures consumed by the check.

pub mod connection;
pub mod target;

// Re-export all configuration types
pub use connection::*;
pub use target::*;

/// Default Consul endpoint
pub fn default_consul_server() -> String {
    "http://127.0.0.1:8500".to_string()
}

/// Default service to check when nothing else is selected
pub fn default_service() -> String {
    "consul".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    10
}
