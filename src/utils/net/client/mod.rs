//! HTTP Client utilities
//!
//! This module provides HTTP client configuration and construction, including
//! the TLS trust settings used to reach the registry.

pub mod types;
pub mod utils;


pub use types::HttpClientConfig;
pub use utils::ClientUtils;
