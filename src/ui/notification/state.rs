use crate::ui::mvi::UiState;
use std::time::{Duration, Instant};

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Oldest entries are dropped once the queue grows past this.
pub const MAX_VISIBLE: usize = 5;

/// Where toasts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastAnchor {
    TopCenter,
}

pub const TOAST_ANCHOR: ToastAnchor = ToastAnchor::TopCenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Live notifications, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    pub entries: Vec<Notification>,
}

impl UiState for NotificationState {}

impl NotificationState {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in display order: newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().rev()
    }
}
