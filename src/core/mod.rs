//! Core domain models.
//!
//! Chunks, the rolling context window and the translation option tables.
//! These are pure data types with no I/O.

pub mod chunk;
pub mod context;
pub mod request;

pub use chunk::Chunk;
pub use context::{ContextWindow, DEFAULT_CONTEXT_CAPACITY};
pub use request::{
    FALLBACK_TONE_DIRECTIVE, Language, Tone, TranslationMode, TranslationRequest, tone_directive,
};
