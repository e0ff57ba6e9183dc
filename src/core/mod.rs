//! Core functionality for the check
//!
//! This module contains the evaluation logic, the registry client interface
//! and its Consul implementation.

pub mod check;
pub mod consul;
pub mod health;
pub mod traits;

pub use check::{run, run_with_client};
