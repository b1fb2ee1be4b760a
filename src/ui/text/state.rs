use crate::ui::mvi::UiState;
use crate::ui::text::stats::TextStats;

/// The text being edited. Starts empty and is only ever replaced whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextState {
    pub text: String,
}

impl UiState for TextState {}

impl TextState {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        super::is_blank(&self.text)
    }

    /// Statistics for the current text, computed fresh on every call.
    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.text)
    }
}
