//! Transient notifications ("toasts").
//!
//! A small queue with its own reducer. Entries carry the instant they were
//! shown and expire on the first `Expire` tick past their duration.

mod intent;
mod reducer;
mod state;

pub use intent::NotificationIntent;
pub use reducer::NotificationReducer;
pub use state::{
    Notification, NotificationKind, NotificationState, ToastAnchor, DEFAULT_DURATION,
    MAX_VISIBLE, TOAST_ANCHOR,
};

pub const EMPTY_TEXT_MESSAGE: &str = "Text area is empty!";
pub const COPIED_MESSAGE: &str = "Text copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy text";
