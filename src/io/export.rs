//! Plain-text export of a finished translation.

use crate::core::Language;
use crate::error::{IoError, Result};
use std::path::{Path, PathBuf};

/// Export file name for a language: `translated_text_<name>.txt`.
///
/// Path separators in the display name become `-`.
///
/// # Examples
///
/// ```
/// use smart_translate::core::Language;
/// use smart_translate::io::export_file_name;
///
/// assert_eq!(export_file_name(Language::French), "translated_text_French.txt");
/// assert_eq!(
///     export_file_name(Language::Himachali),
///     "translated_text_Himachali-Pahadi.txt"
/// );
/// ```
#[must_use]
pub fn export_file_name(language: Language) -> String {
    let name = language.name().replace(['/', '\\'], "-");
    format!("translated_text_{name}.txt")
}

/// Writes `text` to `dir/translated_text_<language>.txt`, creating the
/// directory if needed. Returns the written path.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn export_translation<P: AsRef<Path>>(
    dir: P,
    language: Language,
    text: &str,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| IoError::DirectoryFailed {
            path: dir.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    let path = dir.join(export_file_name(language));
    std::fs::write(&path, text).map_err(|e| IoError::WriteFailed {
        path: path.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(path)
}
