//! Reducer for the text state.

use crate::ui::mvi::Reducer;

use super::intent::TextIntent;
use super::state::TextState;

/// Applies the transition table. Every intent succeeds.
pub struct TextReducer;

impl Reducer for TextReducer {
    type State = TextState;
    type Intent = TextIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TextIntent::Change(payload) => TextState { text: payload },
            TextIntent::Uppercase => TextState {
                text: state.text.to_uppercase(),
            },
            TextIntent::Lowercase => TextState {
                text: state.text.to_lowercase(),
            },
            TextIntent::Clear => TextState::default(),
            TextIntent::RemoveExtraSpaces => TextState {
                text: remove_extra_spaces(&state.text),
            },
        }
    }
}

/// Whitespace as the blank gate and space normalization see it: Unicode
/// whitespace plus the zero-width no-break space, minus NEL (U+0085),
/// which JavaScript's `\s` and `trim()` leave alone.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// True when `text` is empty or contains only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Replace each maximal whitespace run with one `' '` and trim both ends.
pub fn remove_extra_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_space).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
