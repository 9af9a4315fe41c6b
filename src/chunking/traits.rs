//! Chunker trait definition.
//!
//! Defines the interface for text segmentation strategies so the
//! translator can be driven by any chunker.

use crate::core::Chunk;
use crate::error::Result;

/// Trait for chunking text into translatable segments.
///
/// Implementations must be `Send + Sync` so one chunker can serve a
/// translator shared across tasks. Output must be deterministic for the
/// same input, with positions forming a contiguous 0-based sequence.
///
/// # Examples
///
/// ```
/// use smart_translate::chunking::{Chunker, WordWindowChunker};
///
/// let chunker = WordWindowChunker::with_size(100);
/// let text = "Hello, world! ".repeat(20);
/// let chunks = chunker.chunk(&text).unwrap();
/// assert!(!chunks.is_empty());
/// ```
pub trait Chunker: Send + Sync {
    /// Chunks the input text into ordered segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the chunker configuration is invalid.
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>>;

    /// Returns the name of the chunking strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the chunking strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Validates configuration before chunking.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce chunks.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
