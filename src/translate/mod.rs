//! Translation orchestration.
//!
//! A [`Translator`] is one session: it chunks the input, dispatches one
//! streamed completion per chunk, forwards deltas to an [`OutputSink`] and
//! reassembles the results in input order.

pub mod output;
pub mod sink;
pub mod translator;

pub use output::{Segment, TranslationOutput};
pub use sink::{ChannelSink, NullSink, OutputSink, TranslationEvent};
pub use translator::{ContextOrdering, Translator};
