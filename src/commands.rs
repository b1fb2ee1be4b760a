//! Non-interactive commands over stdin.

use crate::error::AppError;
use crate::ui::mvi::Reducer;
use crate::ui::text::{TextIntent, TextReducer, TextState, TextStats};

/// Apply `intent` to `input`, honoring the blank-text gate.
pub fn transform(input: &str, intent: TextIntent) -> Result<String, AppError> {
    let state = TextState::new(input);
    if intent.is_gated() && state.is_blank() {
        tracing::warn!(action = intent.label(), "Refusing to transform blank input");
        return Err(AppError::EmptyInput);
    }
    tracing::debug!(action = intent.label(), bytes = input.len(), "Transforming input");
    Ok(TextReducer::reduce(state, intent).text)
}

/// Statistics for `input`, rendered as text or JSON.
pub fn stats(input: &str, json: bool) -> Result<String, AppError> {
    let stats = TextStats::of(input);
    if json {
        return Ok(serde_json::to_string(&stats)?);
    }
    Ok(format!(
        "No. of words : {}\nNo. of Characters : {}\nReading time : {} seconds",
        stats.words, stats.characters, stats.reading_time_seconds
    ))
}
