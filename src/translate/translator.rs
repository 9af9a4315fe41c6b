//! Translation session: chunk, prompt, stream and reassemble.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::StreamExt;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::output::{Segment, TranslationOutput};
use super::sink::{NullSink, OutputSink, TranslationEvent};
use crate::chunking::{Chunker, WordWindowChunker};
use crate::core::{Chunk, ContextWindow, TranslationMode, TranslationRequest};
use crate::error::{CommandError, Result};
use crate::model::{
    CompletionClient, CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TOP_P,
    ModelConfig,
};
use crate::prompt::{PromptContext, build_prompt};

/// How contextual-mode chunks are scheduled relative to the context window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextOrdering {
    /// All chunks run concurrently; a prompt sees whichever translation
    /// finished most recently.
    #[default]
    Arrival,
    /// Chunks run one after another in position order, so each prompt sees
    /// the translation of the chunk before it.
    Sequential,
}

/// One translation session.
///
/// Owns the chunker, the model client and the rolling context window. The
/// window persists across [`Translator::translate_all`] calls until
/// [`Translator::reset`].
///
/// # Examples
///
/// ```no_run
/// use smart_translate::core::{Language, TranslationRequest};
/// use smart_translate::model::{ModelConfig, OpenAiClient};
/// use smart_translate::translate::Translator;
///
/// # async fn run() -> smart_translate::Result<()> {
/// let config = ModelConfig::new(std::env::var("GROQ_API_KEY").ok())?;
/// let translator = Translator::new(OpenAiClient::new(&config)).with_model_config(&config);
/// let request = TranslationRequest::new("Hello", Language::French, "Formal");
/// let output = translator.translate_all(&request).await?;
/// println!("{}", output.text);
/// # Ok(())
/// # }
/// ```
pub struct Translator<C: CompletionClient> {
    client: C,
    chunker: Box<dyn Chunker>,
    sink: Arc<dyn OutputSink>,
    context: Mutex<ContextWindow>,
    ordering: ContextOrdering,
    model: String,
    max_tokens: u32,
    top_p: f32,
}

impl<C: CompletionClient> Translator<C> {
    /// Creates a session with default chunking, no output sink and an
    /// empty context window.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            chunker: Box::new(WordWindowChunker::new()),
            sink: Arc::new(NullSink),
            context: Mutex::new(ContextWindow::new()),
            ordering: ContextOrdering::default(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }

    /// Replaces the chunker.
    #[must_use]
    pub fn with_chunker(mut self, chunker: impl Chunker + 'static) -> Self {
        self.chunker = Box::new(chunker);
        self
    }

    /// Sets the display surface that receives streamed output.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Sets contextual-mode scheduling.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: ContextOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Replaces the context window (e.g. to change its capacity).
    #[must_use]
    pub fn with_context_window(mut self, window: ContextWindow) -> Self {
        self.context = Mutex::new(window);
        self
    }

    /// Takes model, token cap and `top_p` from an endpoint config.
    #[must_use]
    pub fn with_model_config(mut self, config: &ModelConfig) -> Self {
        self.model.clone_from(&config.model);
        self.max_tokens = config.max_tokens;
        self.top_p = config.top_p;
        self
    }

    /// Contextual-mode scheduling in effect.
    #[must_use]
    pub const fn ordering(&self) -> ContextOrdering {
        self.ordering
    }

    /// Copy of the current context window.
    #[must_use]
    pub fn context_window(&self) -> ContextWindow {
        self.context().clone()
    }

    /// Clears the context window, starting a fresh session.
    pub fn reset(&self) {
        self.context().clear();
        debug!("translation session reset");
    }

    /// Chunks the request text with the session's chunker.
    ///
    /// # Errors
    ///
    /// Returns an error if the chunker configuration is invalid.
    pub fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        self.chunker.chunk(text)
    }

    /// Translates a single chunk, streaming deltas to the sink.
    ///
    /// Failures are reported to the sink and yield an empty string.
    pub async fn translate_chunk(&self, chunk: &Chunk, request: &TranslationRequest) -> String {
        self.translate_segment(chunk, request).await.text
    }

    /// Translates the whole request and joins the chunk results in input
    /// order with single spaces.
    ///
    /// Chunks are dispatched concurrently with no limit, except contextual
    /// mode under [`ContextOrdering::Sequential`]. A failed chunk
    /// contributes an empty segment; the batch is not aborted.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyInput`] for blank text, before any
    /// model call, or a chunking error for an invalid chunker.
    pub async fn translate_all(&self, request: &TranslationRequest) -> Result<TranslationOutput> {
        if request.text.trim().is_empty() {
            return Err(CommandError::EmptyInput.into());
        }

        let chunks = self.chunker.chunk(&request.text)?;
        info!(
            chunks = chunks.len(),
            mode = %request.mode,
            language = %request.target_language,
            "translating"
        );

        let sequential = request.mode == TranslationMode::Contextual
            && self.ordering == ContextOrdering::Sequential;

        let segments = if sequential {
            let mut segments = Vec::with_capacity(chunks.len());
            for chunk in &chunks {
                segments.push(self.translate_segment(chunk, request).await);
            }
            segments
        } else {
            join_all(chunks.iter().map(|chunk| self.translate_segment(chunk, request))).await
        };

        let output = TranslationOutput::new(request, segments);
        info!(
            failed = output.failed_count(),
            chars = output.text.chars().count(),
            "translation finished"
        );
        Ok(output)
    }

    async fn translate_segment(&self, chunk: &Chunk, request: &TranslationRequest) -> Segment {
        let position = chunk.position;
        match self.stream_chunk(chunk, request).await {
            Ok(text) => {
                self.sink.emit(TranslationEvent::ChunkFinished { position });
                Segment::translated(position, text)
            }
            Err(err) => {
                warn!(position, error = %err, "chunk translation failed");
                let message = format!("Translation failed: {err}");
                self.sink.emit(TranslationEvent::ChunkFailed {
                    position,
                    message: message.clone(),
                });
                Segment::failed(position, message)
            }
        }
    }

    async fn stream_chunk(&self, chunk: &Chunk, request: &TranslationRequest) -> Result<String> {
        let position = chunk.position;
        let previous = match request.mode {
            TranslationMode::Contextual => self.context().last().map(str::to_string),
            TranslationMode::Normal => None,
        };

        let prompt = build_prompt(
            chunk,
            &PromptContext::from_request(request, previous.as_deref()),
        );
        let completion = CompletionRequest::new(&self.model, prompt, request.mode.temperature())
            .max_tokens(self.max_tokens)
            .top_p(self.top_p);

        debug!(position, client = self.client.name(), "dispatching chunk");
        self.sink.emit(TranslationEvent::ChunkStarted { position });

        let mut deltas = self.client.stream(completion).await?;
        let mut translation = String::new();
        while let Some(delta) = deltas.next().await {
            let delta = delta?;
            translation.push_str(&delta);
            self.sink.emit(TranslationEvent::Delta {
                position,
                text: delta,
            });
        }

        if request.mode == TranslationMode::Contextual {
            self.context().push(translation.clone());
        }

        Ok(translation)
    }

    fn context(&self) -> MutexGuard<'_, ContextWindow> {
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use crate::error::ModelError;
    use crate::model::DeltaStream;
    use async_trait::async_trait;
    use futures_util::stream;

    /// Echoes the prompt's text line back in two deltas.
    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn stream(&self, request: CompletionRequest) -> Result<DeltaStream> {
            let text = request
                .prompt
                .lines()
                .last()
                .unwrap_or_default()
                .to_uppercase();
            let deltas: Vec<Result<String>> = vec![Ok("<".to_string()), Ok(format!("{text}>"))];
            Ok(Box::pin(stream::iter(deltas)))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    /// Fails every request.
    struct DownClient;

    #[async_trait]
    impl CompletionClient for DownClient {
        async fn stream(&self, _request: CompletionRequest) -> Result<DeltaStream> {
            Err(ModelError::RequestFailed("503 service unavailable".to_string()).into())
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    fn request(text: &str) -> TranslationRequest {
        TranslationRequest::new(text, Language::French, "Formal")
    }

    #[tokio::test]
    async fn test_translate_chunk_accumulates_deltas() {
        let translator = Translator::new(EchoClient);
        let chunk = Chunk::new("hello".to_string(), String::new(), 0);
        let out = translator.translate_chunk(&chunk, &request("hello")).await;
        assert_eq!(out, "<TEXT: HELLO>");
    }

    #[tokio::test]
    async fn test_translate_chunk_failure_is_empty() {
        let translator = Translator::new(DownClient);
        let chunk = Chunk::new("hello".to_string(), String::new(), 0);
        let out = translator.translate_chunk(&chunk, &request("hello")).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_translate_all_rejects_blank() {
        let translator = Translator::new(EchoClient);
        let err = translator.translate_all(&request("   ")).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Command(CommandError::EmptyInput)
        ));
    }

    #[tokio::test]
    async fn test_normal_mode_leaves_context_empty() {
        let translator = Translator::new(EchoClient);
        translator.translate_all(&request("bonjour")).await.unwrap();
        assert!(translator.context_window().is_empty());
    }

    #[tokio::test]
    async fn test_contextual_mode_records_and_resets() {
        let translator = Translator::new(EchoClient);
        let req = request("bonjour").with_mode(TranslationMode::Contextual);
        translator.translate_all(&req).await.unwrap();
        assert_eq!(
            translator.context_window().last(),
            Some("<TEXT TO TRANSLATE: BONJOUR>")
        );

        translator.reset();
        assert!(translator.context_window().is_empty());
    }

    #[test]
    fn test_default_ordering_is_arrival() {
        let translator = Translator::new(EchoClient);
        assert_eq!(translator.ordering(), ContextOrdering::Arrival);
        let translator = translator.with_ordering(ContextOrdering::Sequential);
        assert_eq!(translator.ordering(), ContextOrdering::Sequential);
    }
}
