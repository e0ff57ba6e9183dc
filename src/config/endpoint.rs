//! Registry endpoint resolution
//!
//! The server option accepts either a full `http(s)://` URL or a bare
//! `host[:port]`, which is always reached over plain http.

use std::fmt;
use url::Url;

use crate::utils::error::{CheckError, Result};

/// Address used when the server option is empty
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8500";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved scheme and `host[:port]` of the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsulEndpoint {
    pub scheme: Scheme,
    pub address: String,
}

impl ConsulEndpoint {
    /// Resolve the configured server string
    pub fn resolve(server: &str) -> Result<Self> {
        let scheme = if server.starts_with("https://") {
            Scheme::Https
        } else if server.starts_with("http://") {
            Scheme::Http
        } else {
            let address = if server.is_empty() {
                DEFAULT_ADDRESS.to_string()
            } else {
                server.to_string()
            };
            return Ok(Self {
                scheme: Scheme::Http,
                address,
            });
        };

        let url = Url::parse(server).map_err(|e| CheckError::target_url(server, e))?;
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| CheckError::target_url(server, "missing host"))?;
        let address = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self { scheme, address })
    }

    pub fn is_tls(&self) -> bool {
        self.scheme == Scheme::Https
    }

    /// Root URL every API path is appended to
    pub fn base_url(&self) -> std::result::Result<Url, url::ParseError> {
        Url::parse(&format!("{}://{}/", self.scheme, self.address))
    }
}

impl fmt::Display for ConsulEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.address)
    }
}
