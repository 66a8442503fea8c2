//! Gateway client configuration.

use serde::Deserialize;

/// Configuration for the REST gateway client.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every relative path is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client-side request timeout in seconds. A timed-out request is a
    /// normal network failure, not a token-expiry event. Applied on
    /// native targets only; the browser governs its own fetch timeouts.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_has_conventional_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url":"https://api.example.test/api"}"#)
                .expect("deserialize");
        assert_eq!(config.base_url, "https://api.example.test/api");
    }
}
