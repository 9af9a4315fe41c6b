//! Input text loading.
//!
//! Text to translate comes from an inline argument, a file, or stdin.

use crate::error::{CommandError, IoError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Maximum input file size (16MB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line.
    Inline(String),
    /// Path to a UTF-8 text file.
    File(PathBuf),
    /// Standard input, read to EOF.
    Stdin,
}

impl InputSource {
    /// Picks the source from CLI arguments. Inline text and a file are
    /// mutually exclusive; neither means stdin.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] if both are given.
    pub fn from_args(text: Option<&str>, file: Option<&Path>) -> Result<Self> {
        match (text, file) {
            (Some(_), Some(_)) => Err(CommandError::InvalidArgument(
                "pass either TEXT or --file, not both".to_string(),
            )
            .into()),
            (Some(text), None) => Ok(Self::Inline(text.to_string())),
            (None, Some(path)) => Ok(Self::File(path.to_path_buf())),
            (None, None) => Ok(Self::Stdin),
        }
    }

    /// Reads the full text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => read_file(path),
            Self::Stdin => read_stdin(),
        }
    }
}

/// Reads a UTF-8 file to string.
///
/// # Errors
///
/// Returns an error if the file is missing, too large, or not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let size = std::fs::metadata(path_ref)
        .map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?
        .len();

    if size > MAX_FILE_SIZE {
        return Err(IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
        }
        .into());
    }

    std::fs::read_to_string(path_ref).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Reads stdin to EOF.
///
/// # Errors
///
/// Returns an error if stdin is not valid UTF-8 or cannot be read.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: "<stdin>".to_string(),
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_args() {
        assert_eq!(
            InputSource::from_args(Some("hi"), None).unwrap(),
            InputSource::Inline("hi".to_string())
        );
        assert_eq!(
            InputSource::from_args(None, Some(Path::new("a.txt"))).unwrap(),
            InputSource::File(PathBuf::from("a.txt"))
        );
        assert_eq!(InputSource::from_args(None, None).unwrap(), InputSource::Stdin);
        assert!(InputSource::from_args(Some("hi"), Some(Path::new("a.txt"))).is_err());
    }

    #[test]
    fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        std::fs::write(&path, "Bonjour le monde").unwrap();

        assert_eq!(read_file(&path).unwrap(), "Bonjour le monde");
        assert_eq!(
            InputSource::File(path).read().unwrap(),
            "Bonjour le monde"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/input.txt").unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(read_file(&path).is_err());
    }

    #[test]
    fn test_inline_read() {
        let source = InputSource::Inline("text".to_string());
        assert_eq!(source.read().unwrap(), "text");
    }
}
