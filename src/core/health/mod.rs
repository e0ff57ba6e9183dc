//! Health evaluation for registry checks
//!
//! This module turns the health checks reported by the registry into a
//! single OK / WARNING / CRITICAL verdict.
//!
//! # Module Structure
//!
//! - `types` - Check status, check records, severity and verdict types
//! - `query` - Ordered query mode selection
//! - `checker` - Query execution and aggregation
//! - `tests` - Test suite for evaluation

pub mod checker;
pub mod query;
pub mod types;

pub use checker::{
    ALL_PASSING_MESSAGE, CheckTally, NOT_FOUND_MESSAGE, aggregate, evaluate, fetch,
};
pub use query::QueryMode;
pub use types::{CheckStatus, Diagnostic, HealthCheckRecord, Severity, Verdict};
