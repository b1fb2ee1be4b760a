//! Statistics derived from the current text.
//!
//! Nothing here is stored: callers recompute from the text on every read.

use serde::Serialize;

/// Reading speed used for the time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts displayed alongside the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub reading_time_seconds: u64,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let words = word_count(text);
        Self {
            words,
            characters: character_count(text),
            reading_time_seconds: reading_time_for_words(words),
        }
    }
}

/// Number of non-empty segments when splitting on `' '`.
///
/// Only the space character separates words: `"a\tb"` and `"a\nb"` each
/// count as one word.
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|word| !word.is_empty()).count()
}

/// Number of Unicode scalar values in `text`.
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// `round(words / 200 * 60)` in seconds, evaluated in `f64` so values that
/// land just under a half (205 words = 61.49999999999999) round down.
pub fn reading_time_seconds(text: &str) -> u64 {
    reading_time_for_words(word_count(text))
}

fn reading_time_for_words(words: usize) -> u64 {
    (words as f64 / WORDS_PER_MINUTE as f64 * 60.0).round() as u64
}
