//! Translation options: mode, tone and target language tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directive used when the tone name is not in the table.
pub const FALLBACK_TONE_DIRECTIVE: &str = "Use natural language.";

/// Translation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Each chunk is translated on its own.
    #[default]
    Normal,
    /// Prompts carry the previous translation and an optional domain.
    Contextual,
}

impl TranslationMode {
    /// Sampling temperature for this mode.
    #[must_use]
    pub const fn temperature(self) -> f32 {
        match self {
            Self::Normal => 0.3,
            Self::Contextual => 0.4,
        }
    }

    /// Lowercase mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Contextual => "contextual",
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "contextual" => Ok(Self::Contextual),
            other => Err(format!(
                "unknown translation mode '{other}' (expected normal or contextual)"
            )),
        }
    }
}

/// Translation tone, a fixed style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Polite and professional.
    Formal,
    /// Balanced and natural.
    Neutral,
    /// Casual and conversational.
    Informal,
}

impl Tone {
    /// Every tone, in selector order.
    pub const ALL: [Self; 3] = [Self::Formal, Self::Neutral, Self::Informal];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Neutral => "Neutral",
            Self::Informal => "Informal",
        }
    }

    /// Prompt directive for this tone.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Formal => "Use polite and professional language.",
            Self::Neutral => "Use a balanced and natural tone.",
            Self::Informal => "Use casual and conversational language.",
        }
    }

    /// Looks a tone up by name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|tone| tone.name().eq_ignore_ascii_case(name))
    }
}

/// Resolves a tone name to its directive; unknown names get the fallback.
///
/// # Examples
///
/// ```
/// use smart_translate::core::tone_directive;
///
/// assert_eq!(tone_directive("formal"), "Use polite and professional language.");
/// assert_eq!(tone_directive("Sarcastic"), "Use natural language.");
/// ```
#[must_use]
pub fn tone_directive(name: &str) -> &'static str {
    Tone::from_name(name).map_or(FALLBACK_TONE_DIRECTIVE, Tone::directive)
}

/// Supported target languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Punjabi.
    Punjabi,
    /// Hindi.
    Hindi,
    /// Tamil.
    Tamil,
    /// Bengali.
    Bengali,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// German.
    German,
    /// Himachali / Pahadi.
    Himachali,
    /// Gujarati.
    Gujarati,
    /// Marathi.
    Marathi,
    /// Odia.
    Odia,
}

impl Language {
    /// Every language, in selector order.
    pub const ALL: [Self; 12] = [
        Self::English,
        Self::Punjabi,
        Self::Hindi,
        Self::Tamil,
        Self::Bengali,
        Self::French,
        Self::Spanish,
        Self::German,
        Self::Himachali,
        Self::Gujarati,
        Self::Marathi,
        Self::Odia,
    ];

    /// Display name, as written into prompts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Punjabi => "Punjabi",
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::Bengali => "Bengali",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::German => "German",
            Self::Himachali => "Himachali/Pahadi",
            Self::Gujarati => "Gujarati",
            Self::Marathi => "Marathi",
            Self::Odia => "Odia",
        }
    }

    /// ISO-639-1 code. Himachali/Pahadi shares `hi` with Hindi.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Punjabi => "pa",
            Self::Hindi | Self::Himachali => "hi",
            Self::Tamil => "ta",
            Self::Bengali => "bn",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Gujarati => "gu",
            Self::Marathi => "mr",
            Self::Odia => "or",
        }
    }

    /// Looks a language up by display name, either half of
    /// "Himachali/Pahadi", or code. `hi` resolves to Hindi.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        if needle.eq_ignore_ascii_case("himachali") || needle.eq_ignore_ascii_case("pahadi") {
            return Some(Self::Himachali);
        }
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(needle))
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|lang| lang.code().eq_ignore_ascii_case(needle))
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("unsupported target language '{s}' (run `smart-translate languages`)")
        })
    }
}

/// One translation invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Raw input text.
    pub text: String,
    /// Translation mode.
    pub mode: TranslationMode,
    /// Target language.
    pub target_language: Language,
    /// Tone name as selected; unknown names fall back to natural language.
    pub tone: String,
    /// Optional domain hint (contextual mode only).
    pub domain: Option<String>,
}

impl TranslationRequest {
    /// Creates a normal-mode request with the given tone.
    #[must_use]
    pub fn new(text: impl Into<String>, target_language: Language, tone: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: TranslationMode::Normal,
            target_language,
            tone: tone.into(),
            domain: None,
        }
    }

    /// Sets the mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: TranslationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the domain hint. Blank strings clear it.
    #[must_use]
    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        self.domain = domain.filter(|d| !d.trim().is_empty());
        self
    }

    /// Directive for the requested tone.
    #[must_use]
    pub fn tone_directive(&self) -> &'static str {
        tone_directive(&self.tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Formal", "Use polite and professional language." ; "formal")]
    #[test_case("Neutral", "Use a balanced and natural tone." ; "neutral")]
    #[test_case("informal", "Use casual and conversational language." ; "informal lowercase")]
    #[test_case("Snarky", "Use natural language." ; "unknown")]
    #[test_case("", "Use natural language." ; "empty")]
    fn test_tone_directive(name: &str, expected: &str) {
        assert_eq!(tone_directive(name), expected);
    }

    #[test_case(TranslationMode::Normal, 0.3 ; "normal")]
    #[test_case(TranslationMode::Contextual, 0.4 ; "contextual")]
    fn test_mode_temperature(mode: TranslationMode, expected: f32) {
        assert!((mode.temperature() - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("Normal".parse::<TranslationMode>(), Ok(TranslationMode::Normal));
        assert_eq!(
            "CONTEXTUAL".parse::<TranslationMode>(),
            Ok(TranslationMode::Contextual)
        );
        assert!("fast".parse::<TranslationMode>().is_err());
    }

    #[test_case("French", Language::French ; "name")]
    #[test_case("french", Language::French ; "lowercase")]
    #[test_case("Himachali/Pahadi", Language::Himachali ; "full himachali")]
    #[test_case("pahadi", Language::Himachali ; "pahadi")]
    #[test_case("hi", Language::Hindi ; "shared code resolves to hindi")]
    #[test_case("or", Language::Odia ; "code")]
    fn test_language_parse(input: &str, expected: Language) {
        assert_eq!(input.parse::<Language>(), Ok(expected));
    }

    #[test]
    fn test_language_unknown() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert!(err.contains("Klingon"));
    }

    #[test]
    fn test_language_table_complete() {
        assert_eq!(Language::ALL.len(), 12);
        assert_eq!(Language::Himachali.code(), Language::Hindi.code());
        assert_eq!(Language::Himachali.name(), "Himachali/Pahadi");
    }

    #[test]
    fn test_request_builder() {
        let request = TranslationRequest::new("Hello", Language::French, "Formal")
            .with_mode(TranslationMode::Contextual)
            .with_domain(Some("  ".to_string()));
        assert_eq!(request.mode, TranslationMode::Contextual);
        assert!(request.domain.is_none());
        assert_eq!(
            request.tone_directive(),
            "Use polite and professional language."
        );
    }
}
