//! Utility modules for the check
//!
//! - **error**: Error taxonomy and registry transport errors
//! - **logging**: tracing subscriber setup
//! - **net**: HTTP client construction

pub mod error; // Error handling
pub mod logging; // Logging
pub mod net; // Network & client utilities

pub use error::{CheckError, RegistryError, Result};
pub use logging::{LogFormat, init_logging};
pub use net::{ClientUtils, HttpClientConfig};
