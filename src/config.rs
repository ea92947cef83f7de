//! Client configuration
//!
//! Settings are read from a YAML or JSON file and then overlaid with
//! environment variables. The API key is never compiled in.
//!
//! ```yaml
//! host: https://eventregistry.org
//! api_key: 00000000-0000-0000-0000-000000000000
//! timeout_secs: 60
//! rate_limit:
//!   requests_per_second: 2
//!   burst_size: 2
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "EVENTREGISTRY_API_KEY";

/// Environment variable overriding the service host
pub const ENV_HOST: &str = "EVENTREGISTRY_HOST";

/// Connection settings for the search service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, request paths are joined onto it. May include a path
    /// prefix, e.g. `https://proxy.example/er`
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// Client-side throttling, off unless configured
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_host() -> String {
    "https://eventregistry.org".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_key: None,
            timeout_secs: default_timeout(),
            user_agent: None,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Load from a `.json` file, or YAML for any other extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay values from the process environment
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Overlay values from a variable lookup; empty values are ignored
    #[must_use]
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(host) = get(ENV_HOST) {
            self.host = host;
        }
        self
    }

    /// The API key, which every request needs
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))
    }

    /// Settings for the underlying HTTP client
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.host.clone())
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if let Some(limit) = &self.rate_limit {
            builder = builder.rate_limit(limit.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config = ClientConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.host, "https://eventregistry.org");
        assert!(config.rate_limit.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let config = ClientConfig::from_yaml(
            r"
host: http://localhost:8080
api_key: abc
timeout_secs: 5
rate_limit:
  requests_per_second: 2
",
        )
        .unwrap();
        assert_eq!(config.host, "http://localhost:8080");
        assert_eq!(config.require_api_key().unwrap(), "abc");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.rate_limit.map(|r| r.requests_per_second), Some(2));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"api_key": "from-json", "timeout_secs": 12}}"#).unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-json"));
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/er.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_env_overlay() {
        let vars: HashMap<&str, &str> = [(ENV_API_KEY, "env-key"), (ENV_HOST, "  ")]
            .into_iter()
            .collect();
        let config = ClientConfig::default()
            .apply_vars(|name| vars.get(name).map(|v| (*v).to_string()));
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.host, default_host());
    }

    #[test]
    fn test_missing_api_key() {
        let err = ClientConfig::default().require_api_key().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "api_key"));
    }

    #[test]
    fn test_http_config() {
        let config = ClientConfig {
            timeout_secs: 7,
            user_agent: Some("er-test".into()),
            ..ClientConfig::default()
        };
        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://eventregistry.org"));
        assert_eq!(http.timeout, Duration::from_secs(7));
        assert_eq!(http.user_agent, "er-test");
        assert!(http.rate_limit.is_none());
    }
}
