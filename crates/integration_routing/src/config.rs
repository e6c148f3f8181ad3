//! Routing backend configuration

use serde::{Deserialize, Serialize};

/// Configuration shared by the routing backends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL of the routing service
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// OSRM routing profile
    #[serde(default = "default_profile")]
    pub profile: String,
}

const fn default_timeout_secs() -> u64 {
    20
}

fn default_profile() -> String {
    "foot".to_string()
}

impl RoutingConfig {
    /// Create a configuration for `base_url` with default settings
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            profile: default_profile(),
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            timeout_secs: 5,
            ..Self::new(base_url)
        }
    }

    /// Base URL without trailing slash
    pub(crate) fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
