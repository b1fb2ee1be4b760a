use crate::ui::text::TextIntent;

/// A button in the command bar. All of these sit behind the blank-text gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Uppercase,
    Lowercase,
    Clear,
    Copy,
    RemoveExtraSpaces,
}

impl Command {
    /// Command bar order.
    pub const ALL: [Command; 5] = [
        Command::Uppercase,
        Command::Lowercase,
        Command::Clear,
        Command::Copy,
        Command::RemoveExtraSpaces,
    ];

    /// The text intent behind this command; `None` for `Copy`, which reads
    /// the text instead of changing it.
    pub fn intent(self) -> Option<TextIntent> {
        match self {
            Command::Uppercase => Some(TextIntent::Uppercase),
            Command::Lowercase => Some(TextIntent::Lowercase),
            Command::Clear => Some(TextIntent::Clear),
            Command::Copy => None,
            Command::RemoveExtraSpaces => Some(TextIntent::RemoveExtraSpaces),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::Uppercase => "UpperCase",
            Command::Lowercase => "LowerCase",
            Command::Clear => "Clear",
            Command::Copy => "Copy",
            Command::RemoveExtraSpaces => "Remove extra spaces",
        }
    }

    /// Ctrl+<key> shortcut.
    pub fn shortcut(self) -> char {
        match self {
            Command::Uppercase => 'u',
            Command::Lowercase => 'l',
            Command::Clear => 'k',
            Command::Copy => 'y',
            Command::RemoveExtraSpaces => 'r',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.shortcut().eq_ignore_ascii_case(&key))
    }
}

/// What happened when a command was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Copied,
    /// Text was blank; nothing changed and a warning was shown.
    Blocked,
    CopyFailed,
}
