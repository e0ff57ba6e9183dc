//! Helper functions for creating specific error types

use super::types::{CheckError, RegistryError};
use crate::core::health::Severity;

impl CheckError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn target_url<U: Into<String>, R: ToString>(url: U, reason: R) -> Self {
        Self::TargetUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn client_construction<S: Into<String>>(message: S) -> Self {
        Self::ClientConstruction(message.into())
    }

    pub fn retrieval<T: ToString>(target: T, source: RegistryError) -> Self {
        Self::Retrieval {
            target: target.to_string(),
            source,
        }
    }

    /// Severity reported for this error. Errors are never recovered.
    pub fn severity(&self) -> Severity {
        Severity::Critical
    }
}

impl RegistryError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
