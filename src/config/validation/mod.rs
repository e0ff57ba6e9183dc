//! Configuration validation
//!
//! This module provides validation logic for the check configuration.
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `target_validators`: Argument validation for the query target
//! - `tests`: Test suite for all validators

mod target_validators;
mod trait_def;

pub use target_validators::TAGS_ALL_EXCLUSIVE;
pub use trait_def::Validate;
