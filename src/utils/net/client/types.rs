use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Headers sent with every request. Values are marked sensitive.
    pub default_headers: HashMap<String, String>,
    /// Extra PEM root certificates to trust
    pub trusted_ca_file: Option<PathBuf>,
    pub insecure_skip_verify: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
            default_headers: HashMap::new(),
            trusted_ca_file: None,
            insecure_skip_verify: false,
        }
    }
}

impl HttpClientConfig {
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}
