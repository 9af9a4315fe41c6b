//! Chunk representation.
//!
//! A chunk is a run of whitespace-separated input words plus a lookahead
//! slice of the words that follow it. Chunks carry their order index so
//! translations can be reassembled in input order.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A slice of input text, the unit of independent translation.
///
/// # Examples
///
/// ```
/// use smart_translate::core::Chunk;
///
/// let chunk = Chunk::new("a b c".to_string(), String::new(), 0);
/// assert_eq!(chunk.word_count(), 3);
/// assert!(!chunk.has_overlap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Words of this chunk joined by single spaces.
    pub main_text: String,

    /// Up to the next 200 words after the chunk closed.
    ///
    /// Kept for continuity; the prompt builder does not read it.
    pub overlap_text: String,

    /// Sequential index (0-based).
    pub position: usize,
}

impl Chunk {
    /// Creates a new chunk.
    #[must_use]
    pub const fn new(main_text: String, overlap_text: String, position: usize) -> Self {
        Self {
            main_text,
            overlap_text,
            position,
        }
    }

    /// Number of words in `main_text`.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.main_text.split_whitespace().count()
    }

    /// Length of `main_text` in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.main_text.chars().count()
    }

    /// Whether a lookahead slice was recorded.
    #[must_use]
    pub const fn has_overlap(&self) -> bool {
        !self.overlap_text.is_empty()
    }

    /// Checks if the chunk is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.main_text.is_empty()
    }

    /// Returns a preview of `main_text` (first N grapheme clusters).
    ///
    /// Never splits a grapheme cluster.
    #[must_use]
    pub fn preview(&self, max_graphemes: usize) -> &str {
        match self.main_text.grapheme_indices(true).nth(max_graphemes) {
            Some((byte_pos, _)) => &self.main_text[..byte_pos],
            None => &self.main_text,
        }
    }
}
