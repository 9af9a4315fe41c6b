//! Chunking strategies.
//!
//! Splits input text into overlapping windows small enough for a bounded
//! model context. The word-window strategy is the only one shipped; the
//! [`Chunker`] trait is the seam the translator is generic over.

pub mod traits;
pub mod window;

pub use traits::Chunker;
pub use window::WordWindowChunker;

/// Default soft chunk threshold in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1500;

/// Default number of following words recorded as lookahead.
pub const DEFAULT_LOOKAHEAD_WORDS: usize = 200;

/// Default number of words before the closing word carried into the next chunk.
pub const DEFAULT_RESEED_LOOKBACK: usize = 50;

/// Chunks text with the default word-window settings.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors
/// [`Chunker::chunk`].
pub fn chunk(text: &str) -> crate::error::Result<Vec<crate::core::Chunk>> {
    WordWindowChunker::new().chunk(text)
}

/// Chunks text with a custom threshold.
///
/// # Errors
///
/// Returns [`crate::error::ChunkingError::InvalidConfig`] if `max_chunk_chars` is zero.
pub fn chunk_with_size(
    text: &str,
    max_chunk_chars: usize,
) -> crate::error::Result<Vec<crate::core::Chunk>> {
    WordWindowChunker::with_size(max_chunk_chars).chunk(text)
}
