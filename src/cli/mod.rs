//! CLI layer for smart-translate.
//!
//! Provides the command-line interface using clap, with commands for
//! translating text, running an interactive session and inspecting how
//! input is chunked and detected.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, session_with, translate_with};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
