use super::types::HttpClientConfig;
use crate::utils::error::{CheckError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Certificate, Client, ClientBuilder};
use std::path::Path;
use tracing::{debug, warn};

/// Utility functions for HTTP client operations
pub struct ClientUtils;

impl ClientUtils {
    /// Creates an HTTP client with the specified configuration
    pub fn create_http_client(config: &HttpClientConfig) -> Result<Client> {
        let mut client_builder = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(Self::build_headers(config)?);

        if let Some(ca_file) = &config.trusted_ca_file {
            let certificates = Self::load_certificates(ca_file)?;
            debug!(
                ca_file = %ca_file.display(),
                certificates = certificates.len(),
                "trusting additional CA bundle"
            );
            for certificate in certificates {
                client_builder = client_builder.add_root_certificate(certificate);
            }
        }

        if config.insecure_skip_verify {
            warn!("TLS certificate verification is disabled");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        client_builder.build().map_err(|e| {
            CheckError::client_construction(format!("Failed to build HTTP client: {}", e))
        })
    }

    fn build_headers(config: &HttpClientConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                CheckError::client_construction(format!("Invalid header name '{}': {}", key, e))
            })?;
            let mut value = HeaderValue::from_str(value).map_err(|e| {
                CheckError::client_construction(format!("Invalid header value for '{}': {}", key, e))
            })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Reads a PEM CA bundle from disk. The bundle must hold at least one certificate.
    pub fn load_certificates(path: &Path) -> Result<Vec<Certificate>> {
        let pem = std::fs::read(path).map_err(|e| {
            CheckError::client_construction(format!(
                "Failed to read trusted CA file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let certificates = Certificate::from_pem_bundle(&pem).map_err(|e| {
            CheckError::client_construction(format!(
                "Invalid trusted CA file '{}': {}",
                path.display(),
                e
            ))
        })?;
        if certificates.is_empty() {
            return Err(CheckError::client_construction(format!(
                "Invalid trusted CA file '{}': no PEM certificates found",
                path.display()
            )));
        }
        Ok(certificates)
    }
}
