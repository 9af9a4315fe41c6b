//! Error types for smart-translate operations.
//!
//! This module provides the error hierarchy using `thiserror` for chunking,
//! model calls, I/O and CLI commands.

use thiserror::Error;

/// Result type alias for smart-translate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking-related errors (text segmentation).
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    /// Errors from the hosted completion endpoint.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// I/O errors (input and export files).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors (missing credential, bad defaults).
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Chunking-specific errors.
#[derive(Error, Debug)]
pub enum ChunkingError {
    /// Invalid chunker configuration.
    #[error("invalid chunk configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },
}

/// Errors raised while talking to the completion endpoint.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The endpoint rejected the request or the transport failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The stream broke off after it started.
    #[error("stream interrupted: {0}")]
    StreamInterrupted(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input text was empty.
    #[error("Please enter some text.")]
    EmptyInput,

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<async_openai::error::OpenAIError> for ModelError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;

        match err {
            OpenAIError::InvalidArgument(msg) => Self::InvalidRequest(msg),
            OpenAIError::StreamError(msg) => Self::StreamInterrupted(msg),
            other => Self::RequestFailed(other.to_string()),
        }
    }
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        Self::Model(err.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(CommandError::ExecutionFailed(err.to_string()))
    }
}
