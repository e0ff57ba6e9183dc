//! Network and Client utilities
//!
//! This module provides HTTP client construction for the registry client.

pub mod client;

// Re-export commonly used types and functions
pub use client::{ClientUtils, HttpClientConfig};
