//! Hosted chat-completion client.
//!
//! The translator talks to the model through [`CompletionClient`], which
//! turns one prompt into a stream of text deltas. [`OpenAiClient`] is the
//! production implementation against any OpenAI-compatible endpoint.

pub mod config;
pub mod openai;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::error::Result;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TOP_P, ModelConfig};
pub use openai::OpenAiClient;

/// Incremental text fragments, terminated by end of stream.
pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// One completion call: a single user message, streamed back.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// User message content.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_tokens: u32,
    /// Nucleus sampling mass.
    pub top_p: f32,
}

impl CompletionRequest {
    /// Creates a request with the default token cap and `top_p`.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }

    /// Sets the completion token cap.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the nucleus sampling mass.
    #[must_use]
    pub const fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }
}

/// Streams completions from an external model.
///
/// # Errors
///
/// `stream` fails when the request is rejected before any delta arrives;
/// later failures surface as `Err` items in the returned stream.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Starts a streamed completion.
    async fn stream(&self, request: CompletionRequest) -> Result<DeltaStream>;

    /// Returns a short name for logging.
    fn name(&self) -> &str;
}
