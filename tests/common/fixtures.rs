//! Test fixtures and data factories
//!
//! Builds Consul API payloads as they appear on the wire.

use serde_json::{Value, json};

/// Factory for health check objects (`/v1/health/node`, `/v1/health/state`)
pub struct CheckFactory;

impl CheckFactory {
    /// Node-level check with the given status
    pub fn node_check(check_id: &str, node: &str, status: &str) -> Value {
        json!({
            "Node": node,
            "CheckID": check_id,
            "Name": check_id,
            "Status": status,
            "Notes": "",
            "Output": "",
            "ServiceID": "",
            "ServiceName": "",
            "ServiceTags": [],
            "Type": "",
            "CreateIndex": 10,
            "ModifyIndex": 10
        })
    }

    /// Service check with the given status
    pub fn service_check(check_id: &str, node: &str, service: &str, status: &str) -> Value {
        json!({
            "Node": node,
            "CheckID": check_id,
            "Name": format!("Service '{}' check", service),
            "Status": status,
            "Notes": "",
            "Output": format!("{} is {}", service, status),
            "ServiceID": format!("{}-1", service),
            "ServiceName": service,
            "ServiceTags": [],
            "Type": "http",
            "CreateIndex": 11,
            "ModifyIndex": 12
        })
    }

    pub fn passing(check_id: &str, node: &str) -> Value {
        Self::node_check(check_id, node, "passing")
    }
}

/// Factory for service entries (`/v1/health/service/:service`)
pub struct ServiceEntryFactory;

impl ServiceEntryFactory {
    /// One service instance on `node` with its checks
    pub fn entry(node: &str, service: &str, tags: &[&str], checks: Vec<Value>) -> Value {
        json!({
            "Node": {
                "ID": format!("{}-id", node),
                "Node": node,
                "Address": "10.0.0.1",
                "Datacenter": "dc1"
            },
            "Service": {
                "ID": format!("{}-1", service),
                "Service": service,
                "Tags": tags,
                "Address": "10.0.0.1",
                "Port": 8080
            },
            "Checks": checks
        })
    }
}
