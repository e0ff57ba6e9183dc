//! Error handling for the check
//!
//! This module defines all error types used throughout the check.

mod conversions;
mod helpers;
mod types;

pub use types::{CheckError, RegistryError, Result};
