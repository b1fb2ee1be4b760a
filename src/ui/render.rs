use crate::ui::app::App;
use crate::ui::editor::cursor_position;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, top_center_rect};
use crate::ui::notification::{NotificationKind, NotificationState, ToastAnchor, TOAST_ANCHOR};
use crate::ui::text::TextStats;
use crate::ui::theme::{Palette, ACCENT, SUCCESS, WARNING};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const TOAST_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);
    let theme = app.theme();
    let palette = theme.palette();

    frame.render_widget(Header::new(theme).widget(regions.header), regions.header);
    frame.render_widget(stats_line(app.stats(), &palette), regions.stats);
    draw_editor(frame, app, &palette, regions.editor);
    frame.render_widget(preview(app.text(), &palette), regions.preview);
    frame.render_widget(Footer::new(theme).widget(regions.footer), regions.footer);

    draw_toasts(frame, app.notifications(), area);
}

fn stats_line(stats: TextStats, palette: &Palette) -> Paragraph<'static> {
    let label = Style::default().fg(palette.muted).bg(palette.background);
    let value = Style::default()
        .fg(palette.text)
        .bg(palette.background)
        .add_modifier(Modifier::BOLD);
    let separator = Span::styled("  │  ", label);
    Paragraph::new(Line::from(vec![
        Span::styled(" No. of words : ", label),
        Span::styled(stats.words.to_string(), value),
        separator.clone(),
        Span::styled("No. of Characters : ", label),
        Span::styled(stats.characters.to_string(), value),
        separator,
        Span::styled("Reading time : ", label),
        Span::styled(format!("{} seconds", stats.reading_time_seconds), value),
    ]))
    .style(label)
}

fn draw_editor(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Enter your text ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);

    // Editor does not wrap and display_text keeps one cell per char, so
    // rows/columns map 1:1 to the cursor position.
    let (row, column) = cursor_position(app.text(), app.cursor());
    let scroll_y = row.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = column.saturating_sub(inner.width.saturating_sub(1) as usize);
    let scroll = (clamp_u16(scroll_y), clamp_u16(scroll_x));

    let widget = Paragraph::new(display_text(app.text()))
        .style(Style::default().fg(palette.text).bg(palette.background))
        .scroll(scroll)
        .block(block);
    frame.render_widget(widget, area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + clamp_u16(column - scroll_x).min(inner.width - 1);
        let y = inner.y + clamp_u16(row - scroll_y).min(inner.height - 1);
        frame.set_cursor_position((x, y));
    }
}

fn preview(text: &str, palette: &Palette) -> Paragraph<'static> {
    let block = Block::default()
        .title(Span::styled(" Preview text ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    Paragraph::new(display_text(text))
        .style(Style::default().fg(palette.text).bg(palette.background))
        .wrap(Wrap { trim: false })
        .block(block)
}

fn draw_toasts(frame: &mut Frame<'_>, notifications: &NotificationState, area: Rect) {
    let mut top = 1;
    for notification in notifications.newest_first() {
        let (icon, color) = match notification.kind {
            NotificationKind::Warning => ("⚠", WARNING),
            NotificationKind::Success => ("✔", SUCCESS),
        };
        let message = format!(" {icon} {} ", notification.message);
        let width = clamp_u16(message.chars().count()).saturating_add(2);
        let rect = match TOAST_ANCHOR {
            ToastAnchor::TopCenter => top_center_rect(area, width, TOAST_HEIGHT, top),
        };
        if rect.height == 0 {
            break;
        }

        frame.render_widget(Clear, rect);
        let toast = Paragraph::new(Span::styled(message, Style::default().fg(color))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(toast, rect);
        top += TOAST_HEIGHT;
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

/// Text as drawn: tabs become a single space so every char occupies one
/// cell, matching the char-counted cursor column. The stored text keeps
/// its tabs.
fn display_text(text: &str) -> String {
    text.replace('\t', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::editor::cursor_position;

    #[test]
    fn tabs_draw_as_one_cell() {
        let text = "a\tb";
        let shown = display_text(text);
        assert_eq!(shown, "a b");
        // Cursor after the tab sits on the cell holding 'b'.
        let (_, column) = cursor_position(text, 2);
        assert_eq!(shown.chars().nth(column), Some('b'));
    }

    #[test]
    fn display_text_leaves_other_chars() {
        assert_eq!(display_text("x\ny z"), "x\ny z");
    }
}
