use crate::ui::theme::{ThemeMode, ACCENT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Text-Utils";

/// Title bar with the dark mode switch.
pub struct Header {
    theme: ThemeMode,
}

impl Header {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let text_style = Style::default().fg(palette.text).bg(palette.background);
        let switch = if self.theme.is_dark() {
            "Dark mode [●] "
        } else {
            "Dark mode [ ] "
        };

        let title = format!(" {TITLE}");
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(title.chars().count())
            .saturating_sub(switch.chars().count());

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(ACCENT)
                    .bg(palette.background)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(switch, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
