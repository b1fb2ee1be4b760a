//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::rc::Rc;
use text_utils::clipboard::{ClipboardError, ClipboardSink};
use text_utils::ui::app::App;
use text_utils::ui::theme::ThemeMode;

/// Every string written to the spy clipboard, in order.
pub type SpyLog = Rc<RefCell<Vec<String>>>;

/// Clipboard that records writes instead of touching the system.
pub struct SpyClipboard {
    writes: SpyLog,
    fail: bool,
}

impl SpyClipboard {
    pub fn new() -> (Self, SpyLog) {
        let writes = SpyLog::default();
        (
            Self {
                writes: Rc::clone(&writes),
                fail: false,
            },
            writes,
        )
    }

    pub fn failing() -> Self {
        Self {
            writes: SpyLog::default(),
            fail: true,
        }
    }
}

impl ClipboardSink for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("spy failure".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// App in light mode with a spy clipboard.
pub fn spy_app() -> (App, SpyLog) {
    let (clipboard, writes) = SpyClipboard::new();
    (App::new(ThemeMode::Light, Box::new(clipboard)), writes)
}

/// App whose text was typed in as a single `Change`.
pub fn spy_app_with_text(text: &str) -> (App, SpyLog) {
    let (mut app, writes) = spy_app();
    app.dispatch_text(text_utils::ui::text::TextIntent::Change(text.to_string()));
    (app, writes)
}
