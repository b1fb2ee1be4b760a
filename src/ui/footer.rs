use crate::ui::command::Command;
use crate::ui::input::{QUIT_KEY, THEME_TOGGLE_KEY};
use crate::ui::theme::ThemeMode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command bar: one hint per button plus theme/quit shortcuts.
pub struct Footer {
    theme: ThemeMode,
}

impl Footer {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    pub fn hints() -> String {
        let mut parts: Vec<String> = Command::ALL
            .iter()
            .map(|command| shortcut_hint(command.shortcut(), command.label()))
            .collect();
        parts.push(shortcut_hint(THEME_TOGGLE_KEY, "Theme"));
        parts.push(shortcut_hint(QUIT_KEY, "Quit"));
        format!(" {}", parts.join(" │ "))
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let hints = Self::hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.muted).bg(palette.background);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}

fn shortcut_hint(key: char, label: &str) -> String {
    format!("Ctrl+{}: {}", key.to_ascii_uppercase(), label)
}
