//! # smart-translate
//!
//! Chunked, streaming text translation through a hosted chat-completion
//! model.
//!
//! Long input is split into word windows of roughly 1500 characters, each
//! window is sent to an OpenAI-compatible endpoint as its own streamed
//! request, and the translated pieces are joined back together in input
//! order.
//!
//! ## Features
//!
//! - **Chunking**: word sliding window with a lookahead overlap
//! - **Modes**: normal, or contextual with a rolling window of recent translations
//! - **Tones**: formal, neutral and informal prompt directives
//! - **Streaming**: deltas are forwarded to an [`translate::OutputSink`] as they arrive
//! - **Detection**: best-effort source language guess, defaulting to `en`

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod core;
pub mod detect;
pub mod error;
pub mod io;
pub mod model;
pub mod prompt;
pub mod translate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Chunk, ContextWindow, Language, Tone, TranslationMode, TranslationRequest};

// Re-export chunking types
pub use chunking::{Chunker, WordWindowChunker};

// Re-export model types
pub use model::{CompletionClient, CompletionRequest, ModelConfig, OpenAiClient};

// Re-export translation types
pub use translate::{ContextOrdering, OutputSink, TranslationEvent, TranslationOutput, Translator};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

pub use detect::detect_language;
pub use prompt::build_prompt;
