//! Configuration for the OpenStreetMap services

use serde::{Deserialize, Serialize};

/// User agent sent to the OSM services, which reject anonymous clients
pub(crate) const DEFAULT_USER_AGENT: &str = "marcheroute/0.0.1";

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API (without `/search`)
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration pointing at `base_url`, for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Configuration for the Overpass query service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Full URL of the interpreter endpoint
    #[serde(default = "default_overpass_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_overpass_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

const fn default_overpass_timeout_secs() -> u64 {
    30
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_overpass_url(),
            timeout_secs: default_overpass_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl OverpassConfig {
    /// Create a configuration pointing at `base_url`, for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}
