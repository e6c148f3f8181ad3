//! Mistral chat-completions adapter

mod client;

pub use client::MistralInferenceEngine;
