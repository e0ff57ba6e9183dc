//! Consul HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use tracing::debug;
use url::Url;

use super::types::{ServiceEntry, flatten_checks};
use crate::config::{ConnectionConfig, ConsulEndpoint};
use crate::core::health::HealthCheckRecord;
use crate::core::traits::HealthQueryClient;
use crate::utils::error::{CheckError, RegistryError, Result};
use crate::utils::net::{ClientUtils, HttpClientConfig};

/// Header carrying the ACL token
pub const TOKEN_HEADER: &str = "X-Consul-Token";

/// Read-only client for the Consul health API
#[derive(Debug, Clone)]
pub struct ConsulClient {
    http: Client,
    base_url: Url,
}

impl ConsulClient {
    /// Build a client for `endpoint`
    ///
    /// TLS settings in `connection` are only applied for https endpoints.
    pub fn new(endpoint: &ConsulEndpoint, connection: &ConnectionConfig) -> Result<Self> {
        let base_url = endpoint.base_url().map_err(|e| {
            CheckError::client_construction(format!(
                "Invalid Consul address '{}': {}",
                endpoint.address, e
            ))
        })?;

        let mut http_config = HttpClientConfig {
            timeout: connection.timeout,
            ..Default::default()
        };
        if let Some(token) = connection.token.as_deref().filter(|t| !t.is_empty()) {
            http_config = http_config.with_header(TOKEN_HEADER, token);
        }
        if endpoint.is_tls() {
            http_config.insecure_skip_verify = connection.insecure_skip_verify;
            http_config.trusted_ca_file = connection.trusted_ca_file.clone();
        } else if connection.insecure_skip_verify || connection.trusted_ca_file.is_some() {
            debug!(endpoint = %endpoint, "ignoring TLS options for plain http endpoint");
        }

        let http = ClientUtils::create_http_client(&http_config)?;
        debug!(endpoint = %endpoint, "created Consul client");
        Ok(Self::from_parts(http, base_url))
    }

    /// Wrap an existing HTTP client
    pub fn from_parts(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, RegistryError>
    where
        T: DeserializeOwned + Default,
    {
        debug!(url = %url, "querying Consul");
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(status = %status, error = %e, "failed to read error response body");
                    String::new()
                }
            };
            return Err(RegistryError::api(status.as_u16(), body.trim()));
        }

        let body = response.bytes().await?;
        let parsed: Option<T> = serde_json::from_slice(&body)?;
        Ok(parsed.unwrap_or_default())
    }

    async fn service_entries(
        &self,
        service: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<Vec<HealthCheckRecord>, RegistryError> {
        let url = self.endpoint_url(&["v1", "health", "service", service]);
        let entries: Vec<ServiceEntry> = self.get_json(url, query).await?;
        Ok(flatten_checks(entries))
    }
}

#[async_trait]
impl HealthQueryClient for ConsulClient {
    async fn service_checks_with_tags(
        &self,
        service: &str,
        tags: &BTreeSet<String>,
    ) -> std::result::Result<Vec<HealthCheckRecord>, RegistryError> {
        let query: Vec<(&str, &str)> = tags.iter().map(|tag| ("tag", tag.as_str())).collect();
        self.service_entries(service, &query).await
    }

    async fn node_checks(
        &self,
        node: &str,
    ) -> std::result::Result<Vec<HealthCheckRecord>, RegistryError> {
        let url = self.endpoint_url(&["v1", "health", "node", node]);
        self.get_json(url, &[]).await
    }

    async fn all_checks(&self) -> std::result::Result<Vec<HealthCheckRecord>, RegistryError> {
        let url = self.endpoint_url(&["v1", "health", "state", "any"]);
        self.get_json(url, &[]).await
    }

    async fn service_checks(
        &self,
        service: &str,
    ) -> std::result::Result<Vec<HealthCheckRecord>, RegistryError> {
        self.service_entries(service, &[]).await
    }
}
