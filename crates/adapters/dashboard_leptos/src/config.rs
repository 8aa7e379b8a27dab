//! Dashboard configuration — `data-*` attributes on `<body>` with defaults.
//!
//! Every field has a sensible default so the attributes are optional:
//!
//! ```html
//! <body data-socket-path="/ws" data-api-base="" data-log="info">
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

/// Dataset keys (camel-cased `data-*` names) read from `<body>`.
const DATASET_KEYS: [&str; 3] = ["socketPath", "apiBase", "log"];

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Path of the push channel on the page's host.
    pub socket_path: String,
    /// Prefix prepended to the device service endpoints.
    pub api_base: String,
    /// Filter directive (`RUST_LOG` syntax) for console logging.
    #[serde(rename = "log")]
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            socket_path: "/ws".to_string(),
            api_base: String::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the page's `<body>` dataset.
    ///
    /// Invalid values are reported on the console and replaced by their
    /// defaults, so the dashboard always starts.
    #[must_use]
    pub fn load() -> Self {
        let dataset = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.dataset());

        Self::from_lookup(|key| dataset.as_ref().and_then(|d| d.get(key)))
    }

    /// Build the configuration from a dataset-style lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let attributes: Map<String, Value> = DATASET_KEYS
            .iter()
            .filter_map(|key| lookup(key).map(|val| ((*key).to_string(), Value::String(val))))
            .collect();

        let mut config = Self::parse(attributes).unwrap_or_else(|err| {
            leptos::logging::warn!("{err}, falling back to default configuration");
            Self::default()
        });

        let trimmed = config.api_base.trim_end_matches('/').len();
        config.api_base.truncate(trimmed);

        if let Err(err) = config.validate() {
            leptos::logging::warn!("{err}, using the default socket path");
            config.socket_path = Self::default().socket_path;
        }
        config
    }

    fn parse(attributes: Map<String, Value>) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(Value::Object(attributes))?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.socket_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "socket path {:?} must start with '/'",
                self.socket_path
            )));
        }
        Ok(())
    }

    /// Absolute push channel URL for a page served from `protocol`//`host`.
    #[must_use]
    pub fn socket_url(&self, protocol: &str, host: &str) -> String {
        let scheme = if protocol == "https:" { "wss" } else { "ws" };
        format!("{scheme}://{host}{}", self.socket_path)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Attribute values could not be deserialized.
    #[error("failed to parse dashboard configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
