use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub stats: Rect,
    pub editor: Rect,
    pub preview: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Percentage(50),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .split(area);
    Regions {
        header: chunks[0],
        stats: chunks[1],
        editor: chunks[2],
        preview: chunks[3],
        footer: chunks[4],
    }
}

/// Rect of `width` x `height` centered horizontally, `top` rows below the
/// top of `area`. Clamped to `area`.
pub fn top_center_rect(area: Rect, width: u16, height: u16, top: u16) -> Rect {
    let width = width.min(area.width);
    let y = area.y.saturating_add(top).min(area.bottom());
    let height = height.min(area.bottom().saturating_sub(y));
    Rect {
        x: area.x + (area.width - width) / 2,
        y,
        width,
        height,
    }
}
