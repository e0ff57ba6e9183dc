//! Fake Consul agent
//!
//! Wraps a wiremock server answering the `/v1/health` endpoints.

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A wiremock server speaking the Consul health API
pub struct FakeConsul {
    pub server: MockServer,
}

impl FakeConsul {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// `http://127.0.0.1:<port>`
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Bare `127.0.0.1:<port>` address
    pub fn address(&self) -> String {
        self.server.address().to_string()
    }

    /// Answer `/v1/health/service/:service` with service entries
    pub async fn service(&self, service: &str, entries: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/health/service/{}", service)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(entries)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `/v1/health/service/:service` only when every tag is present
    pub async fn service_with_tags(&self, service: &str, tags: &[&str], entries: Vec<Value>) {
        let mut mock = Mock::given(method("GET"))
            .and(path(format!("/v1/health/service/{}", service)));
        for tag in tags {
            mock = mock.and(query_param("tag", *tag));
        }
        mock.respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(entries)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `/v1/health/node/:node` with checks
    pub async fn node(&self, node: &str, checks: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/health/node/{}", node)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(checks)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `/v1/health/state/any` with checks
    pub async fn all(&self, checks: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/v1/health/state/any"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(checks)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer any request under `api_path` with a raw response
    pub async fn respond(&self, api_path: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(api_path.to_string()))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Number of requests the agent has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
