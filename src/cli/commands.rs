//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::chunking::{WordWindowChunker, chunk_with_size};
use crate::cli::output::{
    OutputFormat, Rendered, StreamRenderer, TranslateReport, format_chunks, format_detection,
    format_languages, format_tones, format_translation,
};
use crate::cli::parser::{Cli, Commands, SessionArgs, TranslateArgs, TranslationOptions};
use crate::core::TranslationRequest;
use crate::detect::detect_language;
use crate::error::{CommandError, Result};
use crate::io::{InputSource, export_translation};
use crate::model::{CompletionClient, ModelConfig, OpenAiClient};
use crate::translate::{ChannelSink, TranslationEvent, Translator};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub async fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Translate(args) => cmd_translate(args, format).await,
        Commands::Session(args) => cmd_session(args, format).await,
        Commands::Chunk {
            text,
            file,
            chunk_size,
            preview,
        } => cmd_chunk(
            text.as_deref(),
            file.as_deref(),
            *chunk_size,
            *preview,
            format,
        ),
        Commands::Detect { text, file } => cmd_detect(text.as_deref(), file.as_deref(), format),
        Commands::Languages => Ok(format_languages(format)),
        Commands::Tones => Ok(format_tones(format)),
    }
}

async fn cmd_translate(args: &TranslateArgs, format: OutputFormat) -> Result<String> {
    let config = args.model.to_config()?;
    let client = OpenAiClient::new(&config);
    translate_with(client, &config, args, format).await
}

/// Runs the `translate` command against any completion client.
///
/// With text output and streaming enabled, deltas are written to stdout as
/// they arrive. Chunk failures are always reported on stderr.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is blank, or the export
/// file cannot be written.
pub async fn translate_with<C: CompletionClient>(
    client: C,
    config: &ModelConfig,
    args: &TranslateArgs,
    format: OutputFormat,
) -> Result<String> {
    let text = InputSource::from_args(args.text.as_deref(), args.file.as_deref())?.read()?;
    if text.trim().is_empty() {
        return Err(CommandError::EmptyInput.into());
    }

    let detected = detect_language(&text);
    debug!(detected = %detected, "detected source language");
    let request = build_request(text, &args.options);

    let (sink, rx) = ChannelSink::new();
    let printer = spawn_printer(rx, format == OutputFormat::Text && !args.no_stream);
    let translator = build_translator(client, config, &args.options, sink);

    let result = translator.translate_all(&request).await;
    drop(translator);
    let _ = printer.await;
    let output = result?;

    let exported_to = if args.download && !output.is_empty() {
        Some(export_translation(
            &args.out_dir,
            output.target_language,
            &output.text,
        )?)
    } else {
        None
    };

    let report = TranslateReport::new(&output, &detected, &args.options.tone, exported_to);
    Ok(format_translation(&report, format))
}

async fn cmd_session(args: &SessionArgs, format: OutputFormat) -> Result<String> {
    let config = args.model.to_config()?;
    let client = OpenAiClient::new(&config);
    let input = BufReader::new(tokio::io::stdin());
    session_with(client, &config, &args.options, input, format).await
}

/// Runs an interactive session over line-oriented input.
///
/// Each non-blank line is translated with the same [`Translator`], so the
/// context window carries over between lines. `:reset` clears it and
/// `:quit` ends the session. Returns a closing summary.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub async fn session_with<C, R>(
    client: C,
    config: &ModelConfig,
    options: &TranslationOptions,
    input: R,
    format: OutputFormat,
) -> Result<String>
where
    C: CompletionClient,
    R: AsyncBufRead + Unpin,
{
    let (sink, rx) = ChannelSink::new();
    let printer = spawn_printer(rx, false);
    let translator = build_translator(client, config, options, sink);

    let mut lines = input.lines();
    let mut translated = 0usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            ":quit" | ":q" => break,
            ":reset" => {
                translator.reset();
                write_stderr("Context cleared.\n");
            }
            "" => write_stderr(&format!("{}\n", CommandError::EmptyInput)),
            text => {
                let detected = detect_language(text);
                let request = build_request(text.to_string(), options);
                match translator.translate_all(&request).await {
                    Ok(output) => {
                        translated += 1;
                        let report = TranslateReport::new(&output, &detected, &options.tone, None);
                        write_stdout(&format_translation(&report, format));
                    }
                    Err(err) => write_stderr(&format!("Error: {err}\n")),
                }
            }
        }
    }

    drop(translator);
    let _ = printer.await;
    Ok(format!("Session ended after {translated} translation(s).\n"))
}

fn cmd_chunk(
    text: Option<&str>,
    file: Option<&Path>,
    chunk_size: usize,
    preview: usize,
    format: OutputFormat,
) -> Result<String> {
    let text = InputSource::from_args(text, file)?.read()?;
    let chunks = chunk_with_size(&text, chunk_size)?;
    Ok(format_chunks(&chunks, preview, format))
}

fn cmd_detect(text: Option<&str>, file: Option<&Path>, format: OutputFormat) -> Result<String> {
    let text = InputSource::from_args(text, file)?.read()?;
    Ok(format_detection(&detect_language(&text), format))
}

fn build_request(text: String, options: &TranslationOptions) -> TranslationRequest {
    TranslationRequest::new(text, options.language, options.tone.clone())
        .with_mode(options.mode)
        .with_domain(options.domain.clone())
}

fn build_translator<C: CompletionClient>(
    client: C,
    config: &ModelConfig,
    options: &TranslationOptions,
    sink: ChannelSink,
) -> Translator<C> {
    Translator::new(client)
        .with_chunker(WordWindowChunker::with_size(options.chunk_size))
        .with_model_config(config)
        .with_ordering(options.ordering())
        .with_sink(Arc::new(sink))
}

/// Drains translation events until every sender is gone.
fn spawn_printer(
    mut rx: UnboundedReceiver<TranslationEvent>,
    show_deltas: bool,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut renderer = StreamRenderer::new();
        while let Some(event) = rx.recv().await {
            if !show_deltas && matches!(event, TranslationEvent::Delta { .. }) {
                continue;
            }
            match renderer.render(&event) {
                Some(Rendered::Out(text)) => write_stdout(&text),
                Some(Rendered::Err(text)) => write_stderr(&text),
                None => {}
            }
        }
        if let Some(Rendered::Out(text)) = renderer.finish() {
            write_stdout(&text);
        }
    })
}

fn write_stdout(text: &str) {
    let mut out = io::stdout().lock();
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
}

fn write_stderr(text: &str) {
    let _ = io::stderr().lock().write_all(text.as_bytes());
}
