use crate::clipboard::ClipboardSink;
use crate::ui::command::{Command, CommandOutcome};
use crate::ui::editor::{apply_edit, clamp_cursor, EditOp};
use crate::ui::mvi::Reducer;
use crate::ui::notification::{
    NotificationIntent, NotificationKind, NotificationReducer, NotificationState,
    COPIED_MESSAGE, COPY_FAILED_MESSAGE, DEFAULT_DURATION, EMPTY_TEXT_MESSAGE,
};
use crate::ui::text::{TextIntent, TextReducer, TextState, TextStats};
use crate::ui::theme::ThemeMode;
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Session state for the interactive UI.
///
/// Owns the text, the toast queue and the theme flag, and is the only
/// place that talks to the clipboard.
pub struct App {
    should_quit: bool,
    /// The text being edited (MVI pattern).
    text: TextState,
    /// Byte offset into `text`, always on a char boundary.
    cursor: usize,
    /// Live toasts (MVI pattern).
    notifications: NotificationState,
    notification_duration: Duration,
    theme: ThemeMode,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(theme: ThemeMode, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            should_quit: false,
            text: TextState::default(),
            cursor: 0,
            notifications: NotificationState::default(),
            notification_duration: DEFAULT_DURATION,
            theme,
            clipboard,
        }
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn stats(&self) -> TextStats {
        self.text.stats()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        tracing::debug!(theme = ?self.theme, "Theme toggled");
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }

    /// Apply a text intent. Not gated: callers that represent buttons go
    /// through [`App::trigger`].
    pub fn dispatch_text(&mut self, intent: TextIntent) {
        let moves_to_end = intent.is_gated();
        tracing::trace!(action = intent.label(), "Applying text action");
        dispatch_mvi!(self, text, TextReducer, intent);
        self.cursor = if moves_to_end {
            self.text.text.len()
        } else {
            clamp_cursor(&self.text.text, self.cursor)
        };
    }

    /// Edit at the cursor. Any change to the text is dispatched as a
    /// `Change` carrying the full new text.
    pub fn edit(&mut self, op: EditOp) {
        let result = apply_edit(self.text.as_str(), self.cursor, &op);
        if let Some(new_text) = result.text {
            dispatch_mvi!(self, text, TextReducer, TextIntent::Change(new_text));
        }
        self.cursor = clamp_cursor(self.text.as_str(), result.cursor);
    }

    pub fn on_paste(&mut self, pasted: &str) {
        // Terminals deliver CRLF from some clipboards.
        let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
        self.edit(EditOp::InsertStr(normalized));
    }

    /// Run a command-bar button through the blank-text gate.
    pub fn trigger(&mut self, command: Command, now: Instant) -> CommandOutcome {
        if self.text.is_blank() {
            tracing::debug!(command = command.label(), "Blocked on blank text");
            self.notify(NotificationKind::Warning, EMPTY_TEXT_MESSAGE, now);
            return CommandOutcome::Blocked;
        }

        match command.intent() {
            Some(intent) => {
                self.dispatch_text(intent);
                CommandOutcome::Applied
            }
            None => self.copy(now),
        }
    }

    fn copy(&mut self, now: Instant) -> CommandOutcome {
        match self.clipboard.set_text(self.text.as_str()) {
            Ok(()) => {
                tracing::info!(chars = self.stats().characters, "Copied text to clipboard");
                self.notify(NotificationKind::Success, COPIED_MESSAGE, now);
                CommandOutcome::Copied
            }
            Err(err) => {
                tracing::warn!("{err}");
                self.notify(NotificationKind::Warning, COPY_FAILED_MESSAGE, now);
                CommandOutcome::CopyFailed
            }
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: &str, now: Instant) {
        let intent = NotificationIntent::Push {
            kind,
            message: message.to_string(),
            now,
            duration: self.notification_duration,
        };
        dispatch_mvi!(self, notifications, NotificationReducer, intent);
    }

    pub fn dismiss_notifications(&mut self) {
        dispatch_mvi!(
            self,
            notifications,
            NotificationReducer,
            NotificationIntent::DismissAll
        );
    }

    pub fn on_tick(&mut self, now: Instant) {
        dispatch_mvi!(
            self,
            notifications,
            NotificationReducer,
            NotificationIntent::Expire { now }
        );
    }
}
