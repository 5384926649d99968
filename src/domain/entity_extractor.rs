use regex::Regex;
use std::sync::LazyLock;

use super::ExtractedInfo;

// Cue words match case-insensitively; the captured token must be a single
// capitalized word. Pattern order is a priority cascade: the first pattern
// that matches anywhere in the text wins and the rest are skipped. The
// narrowness is deliberate (self-introduction scripts), do not widen.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i:hi|hello|hey)[, ]*(?i:this is me|i am|my name is|myself) ([A-Z][a-z]+)",
        r"\b(?i:this is me)[, ]*([A-Z][a-z]+)\b",
        r"\b(?i:my name is) ([A-Z][a-z]+)\b",
        r"\b(?i:i am) ([A-Z][a-z]+)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?i:i'm from|i live in|i am from) ([A-Z][a-z]+)\b",
        r"\b(?i:in|from) ([A-Z][a-z]+)(?:,|\s|$)",
        r"\b(?i:did) \w+ (?i:in) ([A-Z][a-z]+)\b",
        r"\b(?i:moved to) ([A-Z][a-z]+)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Known whisper mis-hearings of one recurring speaker name. A fixed
// correction table, not general spell-checking.
const CONFUSABLE_NAMES: [&str; 3] = ["pyle", "pail", "pyl"];
const CANONICAL_NAME: &str = "Payal";

/// Recover a candidate speaker name and location from transcript text.
///
/// Pure and infallible: empty or non-matching input yields a record with
/// both fields absent. The name and location cascades run independently
/// over the same full text.
pub fn extract_info(text: &str) -> ExtractedInfo {
    if text.trim().is_empty() {
        return ExtractedInfo::default();
    }

    ExtractedInfo {
        name: first_capture(&NAME_PATTERNS, text).map(correct_confusable),
        location: first_capture(&LOCATION_PATTERNS, text),
    }
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

fn correct_confusable(name: String) -> String {
    if CONFUSABLE_NAMES.contains(&name.to_lowercase().as_str()) {
        CANONICAL_NAME.to_string()
    } else {
        name
    }
}
