//! Prompt templates for chunk translation.
//!
//! Normal prompts ask for a plain translation with a tone directive.
//! Contextual prompts add an optional domain line and the previous chunk's
//! translation so consecutive chunks read consistently.

use std::fmt::Write;

use crate::core::{Chunk, Language, TranslationMode, TranslationRequest, tone_directive};

/// Options a prompt is built from, borrowed from a request.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    /// Translation mode.
    pub mode: TranslationMode,
    /// Target language.
    pub target_language: Language,
    /// Tone name; unknown names fall back to natural language.
    pub tone: &'a str,
    /// Domain hint, used in contextual mode only.
    pub domain: Option<&'a str>,
    /// Newest entry of the context window, used in contextual mode only.
    pub previous_context: Option<&'a str>,
}

impl<'a> PromptContext<'a> {
    /// Borrows the prompt options from a request.
    #[must_use]
    pub fn from_request(request: &'a TranslationRequest, previous_context: Option<&'a str>) -> Self {
        Self {
            mode: request.mode,
            target_language: request.target_language,
            tone: &request.tone,
            domain: request.domain.as_deref(),
            previous_context,
        }
    }
}

/// Builds the user message for one chunk.
///
/// `chunk.overlap_text` is not included.
///
/// # Examples
///
/// ```
/// use smart_translate::core::{Chunk, Language, TranslationMode};
/// use smart_translate::prompt::{PromptContext, build_prompt};
///
/// let chunk = Chunk::new("Hello".to_string(), String::new(), 0);
/// let ctx = PromptContext {
///     mode: TranslationMode::Normal,
///     target_language: Language::French,
///     tone: "Formal",
///     domain: None,
///     previous_context: None,
/// };
/// let prompt = build_prompt(&chunk, &ctx);
/// assert!(prompt.contains("Translate the following text to French"));
/// assert!(!prompt.contains("Previous context"));
/// ```
#[must_use]
pub fn build_prompt(chunk: &Chunk, ctx: &PromptContext<'_>) -> String {
    let directive = tone_directive(ctx.tone);
    let language = ctx.target_language.name();

    match ctx.mode {
        TranslationMode::Normal => format!(
            "Translate the following text to {language}.\n\
             Apply the tone: {directive}\n\n\
             Text: {text}",
            text = chunk.main_text,
        ),
        TranslationMode::Contextual => {
            let mut prompt = format!("Perform a contextual translation to {language}.\n");
            if let Some(domain) = ctx.domain {
                let _ = writeln!(prompt, "Domain: {domain}");
            }
            let _ = write!(
                prompt,
                "Previous context: {previous}\n\
                 Apply the tone: {directive}\n\n\
                 Text to translate: {text}",
                previous = ctx.previous_context.unwrap_or_default(),
                text = chunk.main_text,
            );
            prompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> Chunk {
        Chunk::new(text.to_string(), "lookahead words".to_string(), 0)
    }

    fn ctx<'a>(
        mode: TranslationMode,
        tone: &'a str,
        domain: Option<&'a str>,
        previous: Option<&'a str>,
    ) -> PromptContext<'a> {
        PromptContext {
            mode,
            target_language: Language::French,
            tone,
            domain,
            previous_context: previous,
        }
    }

    #[test]
    fn test_normal_prompt() {
        let prompt = build_prompt(
            &chunk("Hello"),
            &ctx(TranslationMode::Normal, "Formal", None, None),
        );
        assert!(prompt.contains("Translate the following text to French"));
        assert!(prompt.contains("polite and professional"));
        assert!(prompt.contains("Text: Hello"));
        assert!(!prompt.contains("Previous context"));
    }

    #[test]
    fn test_normal_prompt_ignores_context_and_domain() {
        let prompt = build_prompt(
            &chunk("Hello"),
            &ctx(TranslationMode::Normal, "Neutral", Some("legal"), Some("Bonjour")),
        );
        assert!(!prompt.contains("Previous context"));
        assert!(!prompt.contains("Domain"));
        assert!(!prompt.contains("Bonjour"));
    }

    #[test]
    fn test_contextual_prompt_empty_context() {
        let prompt = build_prompt(
            &chunk("Hello"),
            &ctx(TranslationMode::Contextual, "Informal", None, None),
        );
        assert!(prompt.starts_with("Perform a contextual translation to French."));
        assert!(prompt.contains("Previous context: \n"));
        assert!(prompt.contains("casual and conversational"));
        assert!(prompt.contains("Text to translate: Hello"));
        assert!(!prompt.contains("Domain:"));
    }

    #[test]
    fn test_contextual_prompt_with_domain_and_context() {
        let prompt = build_prompt(
            &chunk("Second part"),
            &ctx(
                TranslationMode::Contextual,
                "Formal",
                Some("medical"),
                Some("Première partie"),
            ),
        );
        assert!(prompt.contains("Domain: medical\n"));
        assert!(prompt.contains("Previous context: Première partie\n"));
    }

    #[test]
    fn test_unknown_tone_falls_back() {
        let prompt = build_prompt(
            &chunk("Hello"),
            &ctx(TranslationMode::Normal, "Pirate", None, None),
        );
        assert!(prompt.contains("Apply the tone: Use natural language."));
    }

    #[test]
    fn test_overlap_not_injected() {
        let prompt = build_prompt(
            &chunk("Hello"),
            &ctx(TranslationMode::Contextual, "Formal", None, None),
        );
        assert!(!prompt.contains("lookahead words"));
    }

    #[test]
    fn test_from_request() {
        let request = TranslationRequest::new("text", Language::Tamil, "Neutral")
            .with_mode(TranslationMode::Contextual)
            .with_domain(Some("finance".to_string()));
        let ctx = PromptContext::from_request(&request, Some("prev"));
        assert_eq!(ctx.target_language, Language::Tamil);
        assert_eq!(ctx.domain, Some("finance"));
        assert_eq!(ctx.previous_context, Some("prev"));
    }
}
