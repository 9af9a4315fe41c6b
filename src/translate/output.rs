//! Batch translation results.

use serde::Serialize;
use std::fmt;

use crate::core::{Language, TranslationMode, TranslationRequest};

/// Result of translating one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Chunk position.
    pub position: usize,
    /// Translated text; empty when the chunk failed.
    pub text: String,
    /// User-visible error, if the chunk failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Segment {
    /// A successful chunk.
    #[must_use]
    pub const fn translated(position: usize, text: String) -> Self {
        Self {
            position,
            text,
            error: None,
        }
    }

    /// A failed chunk: empty text plus the error.
    #[must_use]
    pub const fn failed(position: usize, error: String) -> Self {
        Self {
            position,
            text: String::new(),
            error: Some(error),
        }
    }

    /// Whether the chunk failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Joined translation of a whole request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationOutput {
    /// Target language.
    pub target_language: Language,
    /// Mode used.
    pub mode: TranslationMode,
    /// Segment texts joined with single spaces, in position order.
    pub text: String,
    /// Per-chunk results in position order.
    pub segments: Vec<Segment>,
}

impl TranslationOutput {
    /// Joins segments for a request. Segments are sorted by position first.
    #[must_use]
    pub fn new(request: &TranslationRequest, mut segments: Vec<Segment>) -> Self {
        segments.sort_by_key(|s| s.position);
        let text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            target_language: request.target_language,
            mode: request.mode,
            text,
            segments,
        }
    }

    /// Number of failed chunks.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_failed()).count()
    }

    /// Errors of failed chunks, in position order.
    pub fn errors(&self) -> impl Iterator<Item = (usize, &str)> {
        self.segments
            .iter()
            .filter_map(|s| s.error.as_deref().map(|e| (s.position, e)))
    }

    /// Whether the translation has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for TranslationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
