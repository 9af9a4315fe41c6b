//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use crate::core::{Chunk, Language, Tone, TranslationMode};
use crate::error::Error;
use crate::translate::{Segment, TranslationEvent, TranslationOutput};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Everything the `translate` command reports.
#[derive(Debug, Serialize)]
pub struct TranslateReport<'a> {
    /// Code reported by language detection.
    pub detected_language: &'a str,
    /// Target language.
    pub target_language: Language,
    /// Mode used.
    pub mode: TranslationMode,
    /// Tone as requested.
    pub tone: &'a str,
    /// Joined translation.
    pub text: &'a str,
    /// Per-chunk results.
    pub segments: &'a [Segment],
    /// Where the translation was saved, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<PathBuf>,
}

impl<'a> TranslateReport<'a> {
    /// Builds a report from a finished translation.
    #[must_use]
    pub fn new(
        output: &'a TranslationOutput,
        detected_language: &'a str,
        tone: &'a str,
        exported_to: Option<PathBuf>,
    ) -> Self {
        Self {
            detected_language,
            target_language: output.target_language,
            mode: output.mode,
            tone,
            text: &output.text,
            segments: &output.segments,
            exported_to,
        }
    }
}

/// Formats the result of a translation.
#[must_use]
pub fn format_translation(report: &TranslateReport<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_translation_text(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_translation_text(report: &TranslateReport<'_>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Detected language: {}", report.detected_language);
    let title = format!("{} translation", report.target_language);
    let _ = writeln!(output, "{title}");
    output.push_str(&"=".repeat(title.chars().count()));
    output.push('\n');
    output.push_str(report.text);
    output.push('\n');

    let failed = report.segments.iter().filter(|s| s.is_failed()).count();
    if failed > 0 {
        let _ = writeln!(
            output,
            "\nWarning: {failed} of {} chunks failed and were left empty.",
            report.segments.len()
        );
    }
    if let Some(path) = &report.exported_to {
        let _ = writeln!(output, "Saved to {}", path.display());
    }
    output
}

/// Formats a chunk plan.
#[must_use]
pub fn format_chunks(chunks: &[Chunk], preview: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(chunks, preview),
        OutputFormat::Json => format_json(&chunks),
    }
}

fn format_chunks_text(chunks: &[Chunk], preview: usize) -> String {
    if chunks.is_empty() {
        return "No chunks (input is empty).\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "{} chunk(s)", chunks.len());
    let _ = writeln!(
        output,
        "{:<6} {:<8} {:<8} {:<10} Preview",
        "Pos", "Words", "Chars", "Lookahead"
    );
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for chunk in chunks {
        let text = if preview == 0 {
            chunk.main_text.as_str()
        } else {
            chunk.preview(preview)
        };
        let ellipsis = if text.len() < chunk.main_text.len() {
            "..."
        } else {
            ""
        };
        let _ = writeln!(
            output,
            "{:<6} {:<8} {:<8} {:<10} {text}{ellipsis}",
            chunk.position,
            chunk.word_count(),
            chunk.char_len(),
            chunk.overlap_text.split_whitespace().count(),
        );
    }
    output
}

/// Formats a detection result.
#[must_use]
pub fn format_detection(code: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Detected language: {code}\n"),
        OutputFormat::Json => format_json(&serde_json::json!({ "detected_language": code })),
    }
}

/// Formats the language table.
#[must_use]
pub fn format_languages(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for lang in Language::ALL {
                let _ = writeln!(output, "{:<18} {}", lang.name(), lang.code());
            }
            output
        }
        OutputFormat::Json => {
            let rows: Vec<_> = Language::ALL
                .iter()
                .map(|l| serde_json::json!({ "name": l.name(), "code": l.code() }))
                .collect();
            format_json(&rows)
        }
    }
}

/// Formats the tone table.
#[must_use]
pub fn format_tones(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for tone in Tone::ALL {
                let _ = writeln!(output, "{:<10} {}", tone.name(), tone.directive());
            }
            output
        }
        OutputFormat::Json => {
            let rows: Vec<_> = Tone::ALL
                .iter()
                .map(|t| serde_json::json!({ "name": t.name(), "directive": t.directive() }))
                .collect();
            format_json(&rows)
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "error": err.to_string() })),
    }
}

/// Renders streamed events for a terminal.
///
/// Deltas go to stdout, prefixed with a chunk marker whenever output
/// switches to a different chunk; failures go to stderr.
#[derive(Debug, Default)]
pub struct StreamRenderer {
    current: Option<usize>,
}

/// Where a rendered fragment should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Write to stdout.
    Out(String),
    /// Write to stderr.
    Err(String),
}

impl StreamRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Renders one event, or nothing for bookkeeping events.
    pub fn render(&mut self, event: &TranslationEvent) -> Option<Rendered> {
        match event {
            TranslationEvent::Delta { position, text } => {
                let mut out = String::new();
                if self.current != Some(*position) {
                    if self.current.is_some() {
                        out.push('\n');
                    }
                    let _ = write!(out, "[chunk {position}] ");
                    self.current = Some(*position);
                }
                out.push_str(text);
                Some(Rendered::Out(out))
            }
            TranslationEvent::ChunkFailed { position, message } => {
                Some(Rendered::Err(format!("Error (chunk {position}): {message}\n")))
            }
            TranslationEvent::ChunkStarted { .. } | TranslationEvent::ChunkFinished { .. } => None,
        }
    }

    /// Closing text once the stream ends.
    #[must_use]
    pub fn finish(&self) -> Option<Rendered> {
        self.current.map(|_| Rendered::Out("\n\n".to_string()))
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TranslationRequest;

    fn output() -> TranslationOutput {
        let request = TranslationRequest::new("x", Language::French, "Formal");
        TranslationOutput::new(
            &request,
            vec![
                Segment::translated(0, "Bonjour".to_string()),
                Segment::failed(1, "Translation failed: 500".to_string()),
            ],
        )
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("other"), OutputFormat::Text);
    }

    #[test]
    fn test_format_translation_text() {
        let output = output();
        let report = TranslateReport::new(&output, "en", "Formal", None);
        let text = format_translation(&report, OutputFormat::Text);
        assert!(text.contains("Detected language: en"));
        assert!(text.contains("French translation"));
        assert!(text.contains("Bonjour "));
        assert!(text.contains("1 of 2 chunks failed"));
        assert!(!text.contains("Saved to"));
    }

    #[test]
    fn test_format_translation_json() {
        let output = output();
        let report = TranslateReport::new(
            &output,
            "en",
            "Formal",
            Some(PathBuf::from("translated_text_French.txt")),
        );
        let json = format_translation(&report, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["detected_language"], "en");
        assert_eq!(value["target_language"], "French");
        assert_eq!(value["segments"][1]["error"], "Translation failed: 500");
        assert_eq!(value["exported_to"], "translated_text_French.txt");
    }

    #[test]
    fn test_format_chunks() {
        let chunks = vec![Chunk::new(
            "one two three".to_string(),
            "four".to_string(),
            0,
        )];
        let text = format_chunks(&chunks, 3, OutputFormat::Text);
        assert!(text.contains("1 chunk(s)"));
        assert!(text.contains("one..."));

        let json = format_chunks(&chunks, 3, OutputFormat::Json);
        assert!(json.contains("\"overlap_text\": \"four\""));

        assert!(format_chunks(&[], 10, OutputFormat::Text).contains("No chunks"));
    }

    #[test]
    fn test_format_tables() {
        let languages = format_languages(OutputFormat::Text);
        assert!(languages.contains("Himachali/Pahadi"));
        assert_eq!(languages.lines().count(), 12);

        let tones = format_tones(OutputFormat::Json);
        assert!(tones.contains("Use casual and conversational language."));
    }

    #[test]
    fn test_format_error_json() {
        let err = Error::Config {
            message: "GROQ_API_KEY is not set".to_string(),
        };
        let json = format_error(&err, OutputFormat::Json);
        assert!(json.contains("\"error\""));
        assert!(json.contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_stream_renderer_marks_chunk_switches() {
        let mut renderer = StreamRenderer::new();
        assert_eq!(renderer.finish(), None);

        let first = renderer.render(&TranslationEvent::Delta {
            position: 0,
            text: "Bon".to_string(),
        });
        assert_eq!(first, Some(Rendered::Out("[chunk 0] Bon".to_string())));

        let same = renderer.render(&TranslationEvent::Delta {
            position: 0,
            text: "jour".to_string(),
        });
        assert_eq!(same, Some(Rendered::Out("jour".to_string())));

        let switch = renderer.render(&TranslationEvent::Delta {
            position: 1,
            text: "Salut".to_string(),
        });
        assert_eq!(switch, Some(Rendered::Out("\n[chunk 1] Salut".to_string())));

        assert_eq!(
            renderer.render(&TranslationEvent::ChunkStarted { position: 2 }),
            None
        );
        assert!(matches!(
            renderer.render(&TranslationEvent::ChunkFailed {
                position: 2,
                message: "Translation failed: x".to_string()
            }),
            Some(Rendered::Err(_))
        ));
        assert!(renderer.finish().is_some());
    }
}
