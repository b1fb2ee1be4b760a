use crate::ui::mvi::Intent;

/// Requests to transform the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextIntent {
    /// Replace the text with the payload. Typing, paste and deletes all
    /// arrive as a `Change` carrying the full new text.
    Change(String),
    Uppercase,
    Lowercase,
    Clear,
    /// Collapse every whitespace run to a single space, then trim.
    RemoveExtraSpaces,
}

impl Intent for TextIntent {}

impl TextIntent {
    /// Look up a parameterless intent by its action name.
    ///
    /// Names are matched case-insensitively; `-` and `_` are ignored so
    /// `remove-extra-spaces`, `remove_extra_spaces` and `removeextraspaces`
    /// all resolve. `Change` needs a payload and has no name.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "clear" => Some(Self::Clear),
            "removeextraspaces" => Some(Self::RemoveExtraSpaces),
            _ => None,
        }
    }

    /// Whether this intent sits behind the blank-text gate.
    pub fn is_gated(&self) -> bool {
        !matches!(self, Self::Change(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Change(_) => "change",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Clear => "clear",
            Self::RemoveExtraSpaces => "remove-extra-spaces",
        }
    }
}
