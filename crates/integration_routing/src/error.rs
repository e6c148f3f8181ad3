//! Routing error types

use thiserror::Error;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Routing service answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the routing response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service answered but found no route
    #[error("No route found")]
    NoRoute,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Map a transport error, distinguishing timeouts
    pub(crate) fn from_transport(e: &reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}
