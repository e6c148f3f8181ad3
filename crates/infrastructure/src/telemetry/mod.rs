//! Tracing subscriber setup
//!
//! Console logging only, either human-readable or JSON lines.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_tracing};
