//! Error handling utilities
//!
//! This module provides the error taxonomy of the check and the registry transport errors.

pub mod error;

// Re-export commonly used types
pub use error::*;
