//! Type conversions for RegistryError

use super::types::RegistryError;

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RegistryError::decode(err.to_string())
        } else if let Some(status) = err.status() {
            RegistryError::api(status.as_u16(), err.to_string())
        } else {
            RegistryError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::decode(err.to_string())
    }
}
