//! AI Core - Chat completion client
//!
//! Provides an abstraction for single-turn LLM completions and an adapter
//! for the hosted Mistral chat-completions API.

pub mod config;
pub mod error;
pub mod mistral;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use mistral::MistralInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
