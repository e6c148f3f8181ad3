//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: geocoding, discovery, routing, completion
//!
//! Sources are layered: serde defaults, an optional `config.toml`, then
//! `MARCHEROUTE_*` environment variables (`__` separates nesting levels,
//! e.g. `MARCHEROUTE_ROUTING__BASE_URL`).

mod integrations;
mod server;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use integrations::{
    CompletionAppConfig, DiscoveryAppConfig, GeocodingAppConfig, RoutingAppConfig,
};
pub use server::ServerConfig;

use crate::telemetry::{LogFormat, TelemetryConfig};

/// Environment variable prefix
const ENV_PREFIX: &str = "MARCHEROUTE";

/// Unprefixed variable naming the routing service
pub const LEGACY_ROUTER_URL: &str = "ROUTER_URL";

/// Unprefixed variable holding the completion API key
pub const LEGACY_API_KEY: &str = "MISTRAL_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Place lookup configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// POI discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryAppConfig,

    /// Routing backend configuration
    #[serde(default)]
    pub routing: RoutingAppConfig,

    /// Prompt completion configuration
    #[serde(default)]
    pub completion: CompletionAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., MARCHEROUTE_SERVER__PORT)
            .add_source(env_source());

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_legacy_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from TOML text layered under `env`
    ///
    /// `env` stands in for the process environment, keyed by variable name.
    pub fn load_from(
        toml: &str,
        env: std::collections::HashMap<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let lookup = env.clone();
        let mut config: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .add_source(env_source().source(Some(env)))
            .build()?
            .try_deserialize()?;
        config.apply_legacy_env(|key| lookup.get(key).cloned());
        Ok(config)
    }

    /// Fill unset values from the unprefixed variables of older deployments
    pub fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.routing.base_url.is_none() {
            if let Some(url) = lookup(LEGACY_ROUTER_URL).filter(|v| !v.trim().is_empty()) {
                debug!(%url, "Routing base URL taken from {LEGACY_ROUTER_URL}");
                self.routing.base_url = Some(url);
            }
        }
        if self.completion.api_key.is_none() {
            if let Some(key) = lookup(LEGACY_API_KEY).filter(|v| !v.is_empty()) {
                debug!("Completion API key taken from {LEGACY_API_KEY}");
                self.completion.api_key = Some(SecretString::from(key));
            }
        }
    }

    /// Configured log format, text when the value is not recognized
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.server.log_format.parse().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to text logs");
            LogFormat::Text
        })
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.allowed_origins")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_sources_use_defaults() {
        let config = AppConfig::load_from("", HashMap::new()).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.geocoding.timeout_secs, 15);
        assert_eq!(config.discovery.timeout_secs, 30);
        assert!(config.routing.base_url.is_none());
        assert_eq!(config.routing.timeout_secs, 20);
        assert_eq!(config.completion.model, "mistral-small-latest");
        assert!(config.completion.api_key.is_none());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let toml = r#"
            [server]
            port = 9000
            allowed_origins = ["https://marcheroute.example"]

            [routing]
            base_url = "http://localhost:5000"
        "#;
        let config = AppConfig::load_from(toml, HashMap::new()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.allowed_origins, vec!["https://marcheroute.example"]);
        assert_eq!(config.routing.base_url.as_deref(), Some("http://localhost:5000"));
    }

    #[test]
    fn prefixed_env_overrides_file() {
        let toml = "[server]\nport = 9000\n";
        let config = AppConfig::load_from(
            toml,
            env(&[
                ("MARCHEROUTE_SERVER__PORT", "9100"),
                ("MARCHEROUTE_SERVER__ALLOWED_ORIGINS", "http://a.test,http://b.test"),
                ("MARCHEROUTE_COMPLETION__API_KEY", "sk-prefixed"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(
            config.completion.api_key.as_ref().map(ExposeSecret::expose_secret),
            Some("sk-prefixed")
        );
    }

    #[test]
    fn legacy_variables_fill_gaps() {
        let config = AppConfig::load_from(
            "",
            env(&[
                ("ROUTER_URL", "http://router.project-osrm.org"),
                ("MISTRAL_API_KEY", "sk-legacy"),
            ]),
        )
        .unwrap();
        assert_eq!(
            config.routing.base_url.as_deref(),
            Some("http://router.project-osrm.org")
        );
        assert_eq!(
            config.completion.api_key.as_ref().map(ExposeSecret::expose_secret),
            Some("sk-legacy")
        );
    }

    #[test]
    fn prefixed_values_win_over_legacy() {
        let config = AppConfig::load_from(
            "",
            env(&[
                ("MARCHEROUTE_ROUTING__BASE_URL", "http://osrm.internal"),
                ("ROUTER_URL", "http://router.project-osrm.org"),
            ]),
        )
        .unwrap();
        assert_eq!(config.routing.base_url.as_deref(), Some("http://osrm.internal"));
    }

    #[test]
    fn blank_legacy_router_url_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_legacy_env(|key| (key == LEGACY_ROUTER_URL).then(|| " ".to_string()));
        assert!(config.routing.base_url.is_none());
    }

    #[test]
    fn log_format_falls_back_to_text() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_format(), LogFormat::Text);
        config.server.log_format = "json".to_string();
        assert_eq!(config.log_format(), LogFormat::Json);
        config.server.log_format = "yaml".to_string();
        assert_eq!(config.log_format(), LogFormat::Text);
    }

    #[test]
    fn serialized_config_omits_api_key() {
        let mut config = AppConfig::default();
        config.apply_legacy_env(|key| (key == LEGACY_API_KEY).then(|| "sk-hidden".to_string()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-hidden"));
    }
}
