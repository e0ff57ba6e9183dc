//! Health check types and verdicts
//!
//! This module defines the records returned by the registry and the
//! tri-state verdict they are reduced to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported by a single health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check is passing
    Passing,
    /// Check is degraded
    Warning,
    /// Check is failing
    Critical,
    /// Check state is not known; counted as critical
    Unknown,
    /// Any other status string; contributes nothing to the verdict
    Other,
}

impl CheckStatus {
    /// Parse a registry status string. Anything unrecognised is `Other`.
    pub fn parse(status: &str) -> Self {
        match status {
            "passing" => CheckStatus::Passing,
            "warning" => CheckStatus::Warning,
            "critical" => CheckStatus::Critical,
            "unknown" => CheckStatus::Unknown,
            _ => CheckStatus::Other,
        }
    }

    /// Severity this status contributes to the verdict
    pub fn severity(&self) -> Severity {
        match self {
            CheckStatus::Passing | CheckStatus::Other => Severity::Ok,
            CheckStatus::Warning => Severity::Warning,
            CheckStatus::Critical | CheckStatus::Unknown => Severity::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passing => "passing",
            CheckStatus::Warning => "warning",
            CheckStatus::Critical => "critical",
            CheckStatus::Unknown => "unknown",
            CheckStatus::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for CheckStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(CheckStatus::parse(&raw))
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One health check result as reported by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckRecord {
    /// Node that reported the check
    #[serde(rename = "Node", default)]
    pub node: String,
    /// Check identifier
    #[serde(rename = "CheckID", default)]
    pub check_id: String,
    /// Human readable check name
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Current status
    #[serde(rename = "Status")]
    pub status: CheckStatus,
    /// Owning service instance, empty for node-level checks
    #[serde(rename = "ServiceID", default)]
    pub service_id: String,
    /// Owning service name, empty for node-level checks
    #[serde(rename = "ServiceName", default)]
    pub service_name: String,
    /// Output of the last check run
    #[serde(rename = "Output", default)]
    pub output: String,
}

/// Verdict severity, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// Process exit code understood by the monitoring pipeline
    pub fn exit_code(&self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single human readable diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(severity: Severity, message: S) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Diagnostic for a failing or degraded check record
    pub fn for_record(record: &HealthCheckRecord) -> Self {
        Self::new(
            record.status.severity(),
            format!("{} on {}", record.check_id, record.node),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Final outcome of one check invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub diagnostics: Vec<Diagnostic>,
}

impl Verdict {
    pub fn new(severity: Severity, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            severity,
            diagnostics,
        }
    }

    /// Verdict with a single diagnostic at the verdict's own severity
    pub fn with_message<S: Into<String>>(severity: Severity, message: S) -> Self {
        Self::new(severity, vec![Diagnostic::new(severity, message)])
    }

    /// Terminal verdict for an error raised before or during the query
    pub fn from_error(error: &crate::utils::error::CheckError) -> Self {
        Self::with_message(error.severity(), error.to_string())
    }

    /// Render diagnostics as output lines prefixed with the plugin name
    pub fn lines(&self, plugin_name: &str) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|diagnostic| format!("{} {}", plugin_name, diagnostic))
            .collect()
    }

    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }
}
