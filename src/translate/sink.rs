//! Display surface for streamed translation output.
//!
//! The translator is the producer: it emits [`TranslationEvent`]s as deltas
//! arrive and chunks finish or fail. A sink is the consumer side.

use serde::Serialize;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Progress of a batch, one event at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TranslationEvent {
    /// A chunk was dispatched to the model.
    ChunkStarted {
        /// Chunk position.
        position: usize,
    },
    /// A fragment of model output arrived.
    Delta {
        /// Chunk position.
        position: usize,
        /// Text fragment.
        text: String,
    },
    /// A chunk completed successfully.
    ChunkFinished {
        /// Chunk position.
        position: usize,
    },
    /// A chunk failed; its result is empty.
    ChunkFailed {
        /// Chunk position.
        position: usize,
        /// User-visible error message.
        message: String,
    },
}

impl TranslationEvent {
    /// Position of the chunk the event belongs to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ChunkStarted { position }
            | Self::Delta { position, .. }
            | Self::ChunkFinished { position }
            | Self::ChunkFailed { position, .. } => *position,
        }
    }
}

/// Receives translation events.
///
/// Called from concurrently running chunk futures, so implementations must
/// not block.
pub trait OutputSink: Send + Sync {
    /// Handles one event.
    fn emit(&self, event: TranslationEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&self, _event: TranslationEvent) {}
}

/// Forwards events over an unbounded channel.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<TranslationEvent>,
}

impl ChannelSink {
    /// Creates a sink and the receiver that consumes it.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<TranslationEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl OutputSink for ChannelSink {
    fn emit(&self, event: TranslationEvent) {
        let _ = self.tx.send(event);
    }
}
