use crate::ui::app::App;
use crate::ui::command::Command;
use crate::ui::editor::EditOp;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub const THEME_TOGGLE_KEY: char = 't';
pub const QUIT_KEY: char = 'q';

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, QUIT_KEY) {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, THEME_TOGGLE_KEY) {
        app.toggle_theme();
        return;
    }

    if let KeyCode::Char(ch) = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(command) = Command::from_shortcut(ch) {
                app.trigger(command, now);
            }
            return;
        }
    }

    if key.code == KeyCode::Esc {
        // First Esc dismisses toasts, the next one quits
        if app.notifications().is_empty() {
            app.request_quit();
        } else {
            app.dismiss_notifications();
        }
        return;
    }

    if let Some(op) = edit_op(key) {
        app.edit(op);
    }
}

fn edit_op(key: KeyEvent) -> Option<EditOp> {
    let op = match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => EditOp::Insert(ch),
        KeyCode::Enter => EditOp::Insert('\n'),
        KeyCode::Tab => EditOp::Insert('\t'),
        KeyCode::Backspace => EditOp::Backspace,
        KeyCode::Delete => EditOp::Delete,
        KeyCode::Left => EditOp::Left,
        KeyCode::Right => EditOp::Right,
        KeyCode::Up => EditOp::Up,
        KeyCode::Down => EditOp::Down,
        KeyCode::Home => EditOp::Home,
        KeyCode::End => EditOp::End,
        _ => return None,
    };
    Some(op)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
