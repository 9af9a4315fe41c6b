//! Best-effort input language detection, for display only.
//!
//! Letters are bucketed by Unicode script. Indic and East Asian scripts map
//! straight to a language code; Latin text is scored against short
//! function-word lists. Anything inconclusive reports English.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Code reported when detection has no signal.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Script of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Script {
    Latin,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Cyrillic,
    Arabic,
    Han,
    Kana,
    Hangul,
}

impl Script {
    fn of(ch: char) -> Option<Self> {
        let script = match u32::from(ch) {
            0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F => Self::Latin,
            0x0400..=0x04FF => Self::Cyrillic,
            0x0600..=0x06FF => Self::Arabic,
            0x0900..=0x097F => Self::Devanagari,
            0x0980..=0x09FF => Self::Bengali,
            0x0A00..=0x0A7F => Self::Gurmukhi,
            0x0A80..=0x0AFF => Self::Gujarati,
            0x0B00..=0x0B7F => Self::Oriya,
            0x0B80..=0x0BFF => Self::Tamil,
            0x3040..=0x30FF => Self::Kana,
            0x3400..=0x4DBF | 0x4E00..=0x9FFF => Self::Han,
            0xAC00..=0xD7AF => Self::Hangul,
            _ => return None,
        };
        Some(script)
    }
}

const ENGLISH_WORDS: &[&str] = &[
    "the", "and", "is", "of", "to", "in", "that", "it", "was", "for", "with", "you", "this",
];
const FRENCH_WORDS: &[&str] = &[
    "le", "la", "les", "et", "est", "des", "une", "un", "du", "que", "pour", "dans", "pas", "je",
];
const SPANISH_WORDS: &[&str] = &[
    "el", "la", "los", "las", "y", "es", "de", "que", "en", "una", "por", "con", "para", "del",
];
const GERMAN_WORDS: &[&str] = &[
    "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "ich", "zu", "mit", "den", "sie",
];

/// Letters that occur in Marathi but not in Hindi (ळ, ऱ).
const MARATHI_MARKERS: &[char] = &['\u{0933}', '\u{0931}'];

/// Detects the language of `text` and returns an ISO-639-1 code.
///
/// Never fails: blank or unclassifiable text yields `"en"`.
///
/// # Examples
///
/// ```
/// use smart_translate::detect::detect_language;
///
/// assert_eq!(detect_language("ਸਤ ਸ੍ਰੀ ਅਕਾਲ"), "pa");
/// assert_eq!(detect_language("Der Hund ist nicht hier und die Katze auch"), "de");
/// assert_eq!(detect_language("12345 !!!"), "en");
/// ```
#[must_use]
pub fn detect_language(text: &str) -> String {
    dominant_script(text)
        .and_then(|script| code_for(script, text))
        .unwrap_or(DEFAULT_LANGUAGE_CODE)
        .to_string()
}

fn dominant_script(text: &str) -> Option<Script> {
    let mut counts: HashMap<Script, usize> = HashMap::new();
    for script in text.chars().filter_map(Script::of) {
        *counts.entry(script).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(script, _)| script)
}

fn code_for(script: Script, text: &str) -> Option<&'static str> {
    let code = match script {
        Script::Latin => return latin_language(text),
        Script::Devanagari if text.contains(MARATHI_MARKERS) => "mr",
        Script::Devanagari => "hi",
        Script::Bengali => "bn",
        Script::Gurmukhi => "pa",
        Script::Gujarati => "gu",
        Script::Oriya => "or",
        Script::Tamil => "ta",
        Script::Cyrillic => "ru",
        Script::Arabic => "ar",
        // Kana outranks Han when both appear; Japanese text mixes them.
        Script::Han if text.chars().any(|c| Script::of(c) == Some(Script::Kana)) => "ja",
        Script::Han => "zh",
        Script::Kana => "ja",
        Script::Hangul => "ko",
    };
    Some(code)
}

fn latin_language(text: &str) -> Option<&'static str> {
    let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();
    if words.is_empty() {
        return None;
    }

    let score = |list: &[&str]| words.iter().filter(|w| list.contains(&w.as_str())).count();
    let candidates = [
        ("en", score(ENGLISH_WORDS)),
        ("fr", score(FRENCH_WORDS)),
        ("es", score(SPANISH_WORDS)),
        ("de", score(GERMAN_WORDS)),
    ];

    // Ties keep the earlier entry, so English wins a draw.
    let (code, best) = candidates
        .into_iter()
        .fold(("en", 0), |acc, c| if c.1 > acc.1 { c } else { acc });
    (best > 0).then_some(code)
}
