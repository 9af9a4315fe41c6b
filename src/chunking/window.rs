//! Sliding word-window chunking strategy.
//!
//! Splits text on whitespace and accumulates words until a soft character
//! threshold is reached. The threshold is checked after each word is
//! appended, so chunks may overflow it by one word. Each new chunk is
//! reseeded with the tail of the one just closed, giving word-level overlap
//! between neighbours.

use crate::chunking::traits::Chunker;
use crate::chunking::{DEFAULT_CHUNK_SIZE, DEFAULT_LOOKAHEAD_WORDS, DEFAULT_RESEED_LOOKBACK};
use crate::core::Chunk;
use crate::error::{ChunkingError, Result};
use tracing::debug;

/// Word-window chunker with soft overflow and trailing reseed.
///
/// # Examples
///
/// ```
/// use smart_translate::chunking::{Chunker, WordWindowChunker};
///
/// let chunker = WordWindowChunker::new();
/// let chunks = chunker.chunk("a b c").unwrap();
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].main_text, "a b c");
/// assert!(chunks[0].overlap_text.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WordWindowChunker {
    /// Soft threshold in characters (word length + 1 per word).
    chunk_size: usize,
    /// Words recorded as lookahead after a chunk closes.
    lookahead_words: usize,
    /// Words before the closing word carried into the next chunk.
    reseed_lookback: usize,
}

impl Default for WordWindowChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl WordWindowChunker {
    /// Creates a chunker with the default 1500-char threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            lookahead_words: DEFAULT_LOOKAHEAD_WORDS,
            reseed_lookback: DEFAULT_RESEED_LOOKBACK,
        }
    }

    /// Creates a chunker with a custom threshold.
    #[must_use]
    pub const fn with_size(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Self::new()
        }
    }

    /// Sets how many following words are recorded as `overlap_text`.
    #[must_use]
    pub const fn lookahead_words(mut self, words: usize) -> Self {
        self.lookahead_words = words;
        self
    }

    /// Sets how many words before the closing word are carried forward.
    ///
    /// The reseeded chunk holds `lookback + 1` words: the closing word and
    /// the `lookback` words before it.
    #[must_use]
    pub const fn reseed_lookback(mut self, words: usize) -> Self {
        self.reseed_lookback = words;
        self
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn weight(word: &str) -> usize {
        word.chars().count() + 1
    }
}

impl Chunker for WordWindowChunker {
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        self.validate()?;

        let words: Vec<&str> = text.split_whitespace().collect();
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0;

        for (i, &word) in words.iter().enumerate() {
            current.push(word);
            current_len += Self::weight(word);

            if current_len >= self.chunk_size {
                let lookahead_end = (i + 1 + self.lookahead_words).min(words.len());
                let overlap = words[i + 1..lookahead_end].join(" ");

                chunks.push(Chunk::new(current.join(" "), overlap, chunks.len()));

                current = words[i.saturating_sub(self.reseed_lookback)..=i].to_vec();
                current_len = current.iter().map(|w| Self::weight(w)).sum();
            }
        }

        if !current.is_empty() {
            chunks.push(Chunk::new(current.join(" "), String::new(), chunks.len()));
        }

        debug!(
            words = words.len(),
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            "chunked input"
        );

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "word-window"
    }

    fn description(&self) -> &'static str {
        "Whitespace word windows with soft size threshold and trailing reseed"
    }

    fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkingError::InvalidConfig {
                reason: "chunk_size must be > 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
