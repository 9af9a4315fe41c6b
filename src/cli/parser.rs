//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::chunking::DEFAULT_CHUNK_SIZE;
use crate::core::{Language, TranslationMode};
use crate::error::Result;
use crate::model::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, ModelConfig};
use crate::translate::ContextOrdering;

/// smart-translate: chunked, streaming LLM translation.
///
/// Splits long text into overlapping windows, translates each window
/// through a hosted chat-completion model and joins the results.
#[derive(Parser, Debug)]
#[command(name = "smart-translate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text, streaming output as it arrives.
    #[command(alias = "t")]
    Translate(TranslateArgs),

    /// Interactive session: one translation per input line.
    ///
    /// The context window carries over between lines. Type `:reset` to
    /// clear it and `:quit` to leave.
    Session(SessionArgs),

    /// Show how text would be chunked, without calling the model.
    Chunk {
        /// Text to chunk (reads stdin if neither TEXT nor --file is given).
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Soft chunk threshold in characters.
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Characters of each chunk to preview (0 shows everything).
        #[arg(long, default_value = "80")]
        preview: usize,
    },

    /// Detect the language of the input text.
    Detect {
        /// Text to inspect (reads stdin if neither TEXT nor --file is given).
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List supported target languages.
    #[command(alias = "langs")]
    Languages,

    /// List translation tones.
    Tones,
}

/// Arguments of the `translate` command.
#[derive(Args, Debug, Clone)]
pub struct TranslateArgs {
    /// Text to translate (reads stdin if neither TEXT nor --file is given).
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Translation options.
    #[command(flatten)]
    pub options: TranslationOptions,

    /// Print only the final translation, not the streamed deltas.
    #[arg(long)]
    pub no_stream: bool,

    /// Save the translation as `translated_text_<language>.txt`.
    #[arg(short, long)]
    pub download: bool,

    /// Directory the downloaded file is written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Model endpoint settings.
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments of the `session` command.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Translation options.
    #[command(flatten)]
    pub options: TranslationOptions,

    /// Model endpoint settings.
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Mode, language, tone and chunking selectors.
#[derive(Args, Debug, Clone)]
pub struct TranslationOptions {
    /// Translation mode (normal, contextual).
    #[arg(short, long, default_value = "normal")]
    pub mode: TranslationMode,

    /// Target language (see `smart-translate languages`).
    #[arg(short, long, default_value = "English")]
    pub language: Language,

    /// Tone (Formal, Neutral, Informal).
    #[arg(short, long, default_value = "Formal")]
    pub tone: String,

    /// Domain hint for contextual mode (e.g. legal, medical).
    #[arg(long)]
    pub domain: Option<String>,

    /// Translate contextual-mode chunks one at a time, in order.
    #[arg(long)]
    pub sequential_context: bool,

    /// Soft chunk threshold in characters.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

impl TranslationOptions {
    /// Contextual-mode scheduling selected by the flags.
    #[must_use]
    pub const fn ordering(&self) -> ContextOrdering {
        if self.sequential_context {
            ContextOrdering::Sequential
        } else {
            ContextOrdering::Arrival
        }
    }
}

/// Model endpoint settings, with environment fallbacks.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// API key for the completion endpoint.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// OpenAI-compatible API base URL.
    #[arg(long, env = "GROQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Completion token cap per chunk.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
}

impl ModelArgs {
    /// Resolves the endpoint config.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key was supplied.
    pub fn to_config(&self) -> Result<ModelConfig> {
        Ok(ModelConfig::new(self.api_key.clone())?
            .base_url(&self.base_url)
            .model(&self.model)
            .max_tokens(self.max_tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_translate_defaults() {
        let cli = Cli::try_parse_from(["smart-translate", "translate", "Hello"]).unwrap();
        let Commands::Translate(args) = cli.command else {
            unreachable!("expected translate");
        };
        assert_eq!(args.text.as_deref(), Some("Hello"));
        assert_eq!(args.options.mode, TranslationMode::Normal);
        assert_eq!(args.options.language, Language::English);
        assert_eq!(args.options.tone, "Formal");
        assert_eq!(args.options.chunk_size, 1500);
        assert_eq!(args.options.ordering(), ContextOrdering::Arrival);
        assert_eq!(args.model.model, DEFAULT_MODEL);
        assert!(!args.download);
    }

    #[test]
    fn test_translate_options() {
        let cli = Cli::try_parse_from([
            "smart-translate",
            "translate",
            "--mode",
            "Contextual",
            "--language",
            "himachali",
            "--tone",
            "Informal",
            "--domain",
            "legal",
            "--sequential-context",
            "--download",
            "Hello",
        ])
        .unwrap();
        let Commands::Translate(args) = cli.command else {
            unreachable!("expected translate");
        };
        assert_eq!(args.options.mode, TranslationMode::Contextual);
        assert_eq!(args.options.language, Language::Himachali);
        assert_eq!(args.options.domain.as_deref(), Some("legal"));
        assert_eq!(args.options.ordering(), ContextOrdering::Sequential);
        assert!(args.download);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Cli::try_parse_from(["smart-translate", "translate", "-l", "Klingon", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_model_args_require_key() {
        let args = ModelArgs {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        assert!(args.to_config().is_err());

        let args = ModelArgs {
            api_key: Some("key".to_string()),
            ..args
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
