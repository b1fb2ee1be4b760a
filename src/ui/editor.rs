//! Cursor-aware edits over the text buffer.
//!
//! Edits never touch state directly: they compute the full new text, which
//! the app dispatches as a `Change`. Cursors are byte offsets that always
//! sit on a char boundary.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    InsertStr(String),
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Result of an edit: the replacement text, if any, and the new cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub text: Option<String>,
    pub cursor: usize,
}

impl EditResult {
    fn moved(cursor: usize) -> Self {
        Self { text: None, cursor }
    }

    fn changed(text: String, cursor: usize) -> Self {
        Self {
            text: Some(text),
            cursor,
        }
    }
}

pub fn apply_edit(text: &str, cursor: usize, op: &EditOp) -> EditResult {
    let cursor = clamp_cursor(text, cursor);
    match op {
        EditOp::Insert(ch) => {
            let mut next = String::with_capacity(text.len() + ch.len_utf8());
            next.push_str(&text[..cursor]);
            next.push(*ch);
            next.push_str(&text[cursor..]);
            EditResult::changed(next, cursor + ch.len_utf8())
        }
        EditOp::InsertStr(s) => {
            if s.is_empty() {
                return EditResult::moved(cursor);
            }
            let mut next = String::with_capacity(text.len() + s.len());
            next.push_str(&text[..cursor]);
            next.push_str(s);
            next.push_str(&text[cursor..]);
            EditResult::changed(next, cursor + s.len())
        }
        EditOp::Backspace => match prev_boundary(text, cursor) {
            Some(prev) => {
                let mut next = String::with_capacity(text.len());
                next.push_str(&text[..prev]);
                next.push_str(&text[cursor..]);
                EditResult::changed(next, prev)
            }
            None => EditResult::moved(cursor),
        },
        EditOp::Delete => match next_boundary(text, cursor) {
            Some(end) => {
                let mut next = String::with_capacity(text.len());
                next.push_str(&text[..cursor]);
                next.push_str(&text[end..]);
                EditResult::changed(next, cursor)
            }
            None => EditResult::moved(cursor),
        },
        EditOp::Left => EditResult::moved(prev_boundary(text, cursor).unwrap_or(cursor)),
        EditOp::Right => EditResult::moved(next_boundary(text, cursor).unwrap_or(cursor)),
        EditOp::Home => EditResult::moved(line_start(text, cursor)),
        EditOp::End => EditResult::moved(line_end(text, cursor)),
        EditOp::Up => {
            let start = line_start(text, cursor);
            if start == 0 {
                return EditResult::moved(0);
            }
            let column = text[start..cursor].chars().count();
            let prev_end = start - 1;
            let prev_start = line_start(text, prev_end);
            EditResult::moved(advance(text, prev_start, prev_end, column))
        }
        EditOp::Down => {
            let end = line_end(text, cursor);
            if end == text.len() {
                return EditResult::moved(end);
            }
            let column = text[line_start(text, cursor)..cursor].chars().count();
            let next_start = end + 1;
            let next_end = line_end(text, next_start);
            EditResult::moved(advance(text, next_start, next_end, column))
        }
    }
}

/// Largest char boundary not past `cursor`.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// (row, column) of the cursor, both counted in chars.
pub fn cursor_position(text: &str, cursor: usize) -> (usize, usize) {
    let cursor = clamp_cursor(text, cursor);
    let before = &text[..cursor];
    let row = before.matches('\n').count();
    let column = before[line_start(text, cursor)..].chars().count();
    (row, column)
}

fn prev_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[..cursor]
        .chars()
        .next_back()
        .map(|c| cursor - c.len_utf8())
}

fn next_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[cursor..].chars().next().map(|c| cursor + c.len_utf8())
}

fn line_start(text: &str, cursor: usize) -> usize {
    text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn line_end(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .find('\n')
        .map(|i| cursor + i)
        .unwrap_or(text.len())
}

fn advance(text: &str, from: usize, limit: usize, chars: usize) -> usize {
    text[from..limit]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| from + i)
        .unwrap_or(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_cursor() {
        let result = apply_edit("ac", 1, &EditOp::Insert('b'));
        assert_eq!(result.text.as_deref(), Some("abc"));
        assert_eq!(result.cursor, 2);
    }

    #[test]
    fn insert_multibyte_advances_by_bytes() {
        let result = apply_edit("", 0, &EditOp::Insert('é'));
        assert_eq!(result.text.as_deref(), Some("é"));
        assert_eq!(result.cursor, 2);
    }

    #[test]
    fn paste_inserts_whole_string() {
        let result = apply_edit("ad", 1, &EditOp::InsertStr("bc".into()));
        assert_eq!(result.text.as_deref(), Some("abcd"));
        assert_eq!(result.cursor, 3);
    }

    #[test]
    fn backspace_removes_previous_char() {
        let result = apply_edit("héllo", 3, &EditOp::Backspace);
        assert_eq!(result.text.as_deref(), Some("hllo"));
        assert_eq!(result.cursor, 1);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let result = apply_edit("abc", 0, &EditOp::Backspace);
        assert_eq!(result, EditResult::moved(0));
    }

    #[test]
    fn delete_removes_next_char() {
        let result = apply_edit("abc", 1, &EditOp::Delete);
        assert_eq!(result.text.as_deref(), Some("ac"));
        assert_eq!(result.cursor, 1);
        assert_eq!(apply_edit("abc", 3, &EditOp::Delete).text, None);
    }

    #[test]
    fn vertical_moves_keep_column() {
        let text = "abcd\nxy\nlonger";
        // cursor after "abc"
        let down = apply_edit(text, 3, &EditOp::Down);
        assert_eq!(down.cursor, 7); // end of "xy", column clamped
        let down = apply_edit(text, down.cursor, &EditOp::Down);
        assert_eq!(down.cursor, 10); // column 2 on "longer"
        let up = apply_edit(text, 10, &EditOp::Up);
        assert_eq!(up.cursor, 7);
        assert_eq!(apply_edit(text, 2, &EditOp::Up).cursor, 0);
    }

    #[test]
    fn home_and_end_stay_on_line() {
        let text = "one\ntwo";
        assert_eq!(apply_edit(text, 5, &EditOp::Home).cursor, 4);
        assert_eq!(apply_edit(text, 1, &EditOp::End).cursor, 3);
    }

    #[test]
    fn clamp_snaps_to_char_boundary() {
        assert_eq!(clamp_cursor("é", 1), 0);
        assert_eq!(clamp_cursor("abc", 10), 3);
    }

    #[test]
    fn cursor_position_counts_rows_and_chars() {
        assert_eq!(cursor_position("ab\ncé d", 7), (1, 3));
        assert_eq!(cursor_position("", 0), (0, 0));
    }
}
