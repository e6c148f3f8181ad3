//! Upstream service configurations: geocoding, discovery, routing, completion.

use ai_core::InferenceConfig;
use integration_osm::{NominatimConfig, OverpassConfig};
use integration_routing::RoutingConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

// ==============================
// Geocoding Configuration
// ==============================

/// Place lookup (Nominatim) configuration
///
/// Missing fields fall back to [`NominatimConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingAppConfig {
    /// Base URL of the Nominatim API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every lookup
    pub user_agent: String,
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        let NominatimConfig {
            base_url,
            timeout_secs,
            user_agent,
        } = NominatimConfig::default();
        Self {
            base_url,
            timeout_secs,
            user_agent,
        }
    }
}

impl GeocodingAppConfig {
    /// Client configuration for [`integration_osm::NominatimGeocodingClient`]
    #[must_use]
    pub fn to_client_config(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }
}

// ==============================
// Discovery Configuration
// ==============================

/// Spatial POI service (Overpass) configuration
///
/// Missing fields fall back to [`OverpassConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryAppConfig {
    /// Interpreter endpoint URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every query
    pub user_agent: String,
}

impl Default for DiscoveryAppConfig {
    fn default() -> Self {
        let OverpassConfig {
            base_url,
            timeout_secs,
            user_agent,
        } = OverpassConfig::default();
        Self {
            base_url,
            timeout_secs,
            user_agent,
        }
    }
}

impl DiscoveryAppConfig {
    /// Client configuration for [`integration_osm::OverpassPoiClient`]
    #[must_use]
    pub fn to_client_config(&self) -> OverpassConfig {
        OverpassConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }
}

// ==============================
// Routing Configuration
// ==============================

/// Routing backend configuration
///
/// Routing is optional: without a base URL every plan uses the
/// straight-line fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// Base URL shared by the OSRM and GraphHopper backends
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_routing_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_routing_timeout_secs() -> u64 {
    20
}

impl Default for RoutingAppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_routing_timeout_secs(),
        }
    }
}

impl RoutingAppConfig {
    /// Client configuration, `None` when no (non-blank) base URL is set
    #[must_use]
    pub fn to_client_config(&self) -> Option<RoutingConfig> {
        let base_url = self.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        Some(RoutingConfig {
            timeout_secs: self.timeout_secs,
            ..RoutingConfig::new(base_url)
        })
    }
}

// ==============================
// Completion Configuration
// ==============================

/// Chat-completion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionAppConfig {
    /// Base URL of the chat-completions API
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,

    /// Model used for every completion
    #[serde(default = "default_completion_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_completion_timeout_ms")]
    pub timeout_ms: u64,

    /// API key (never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

fn default_completion_base_url() -> String {
    "https://api.mistral.ai/v1".to_string()
}

fn default_completion_model() -> String {
    "mistral-small-latest".to_string()
}

const fn default_completion_timeout_ms() -> u64 {
    60_000
}

impl Default for CompletionAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_completion_base_url(),
            model: default_completion_model(),
            timeout_ms: default_completion_timeout_ms(),
            api_key: None,
        }
    }
}

impl CompletionAppConfig {
    /// Client configuration for [`ai_core::MistralInferenceEngine`]
    #[must_use]
    pub fn to_client_config(&self) -> InferenceConfig {
        InferenceConfig {
            base_url: self.base_url.clone(),
            default_model: self.model.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn geocoding_defaults() {
        let client = GeocodingAppConfig::default().to_client_config();
        assert_eq!(client.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(client.timeout_secs, 15);
        assert_eq!(client.user_agent, "marcheroute/0.0.1");
    }

    #[test]
    fn discovery_defaults() {
        let client = DiscoveryAppConfig::default().to_client_config();
        assert_eq!(client.base_url, "https://overpass-api.de/api/interpreter");
        assert_eq!(client.timeout_secs, 30);
    }

    #[test]
    fn osm_defaults_follow_client_crate() {
        let geocoding = GeocodingAppConfig::default();
        let nominatim = NominatimConfig::default();
        assert_eq!(geocoding.base_url, nominatim.base_url);
        assert_eq!(geocoding.timeout_secs, nominatim.timeout_secs);
        assert_eq!(geocoding.user_agent, nominatim.user_agent);

        let discovery = DiscoveryAppConfig::default();
        let overpass = OverpassConfig::default();
        assert_eq!(discovery.base_url, overpass.base_url);
        assert_eq!(discovery.timeout_secs, overpass.timeout_secs);
        assert_eq!(discovery.user_agent, overpass.user_agent);
    }

    #[test]
    fn partial_discovery_section_keeps_client_defaults() {
        let config: DiscoveryAppConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:12345/api/interpreter"}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:12345/api/interpreter");
        assert_eq!(config.timeout_secs, OverpassConfig::default().timeout_secs);
        assert_eq!(config.user_agent, OverpassConfig::default().user_agent);
    }

    #[test]
    fn routing_is_unconfigured_by_default() {
        assert!(RoutingAppConfig::default().to_client_config().is_none());
    }

    #[test]
    fn blank_routing_url_is_unconfigured() {
        let config = RoutingAppConfig {
            base_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.to_client_config().is_none());
    }

    #[test]
    fn routing_url_builds_client_config() {
        let config = RoutingAppConfig {
            base_url: Some("http://router.project-osrm.org".to_string()),
            timeout_secs: 7,
        };
        let client = config.to_client_config().unwrap();
        assert_eq!(client.base_url, "http://router.project-osrm.org");
        assert_eq!(client.timeout_secs, 7);
        assert_eq!(client.profile, "foot");
    }

    #[test]
    fn completion_api_key_is_not_serialized() {
        let config = CompletionAppConfig {
            api_key: Some(SecretString::from("sk-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn completion_api_key_deserializes() {
        let config: CompletionAppConfig =
            serde_json::from_str(r#"{"api_key": "sk-test"}"#).unwrap();
        assert_eq!(
            config.api_key.as_ref().map(ExposeSecret::expose_secret),
            Some("sk-test")
        );
        assert_eq!(config.model, "mistral-small-latest");
    }
}
