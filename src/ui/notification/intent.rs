use crate::ui::mvi::Intent;
use std::time::{Duration, Instant};

use super::state::NotificationKind;

#[derive(Debug, Clone)]
pub enum NotificationIntent {
    /// Show a new toast stamped with `now`.
    Push {
        kind: NotificationKind,
        message: String,
        now: Instant,
        duration: Duration,
    },
    /// Drop every toast whose duration has elapsed at `now`.
    Expire { now: Instant },
    DismissAll,
}

impl Intent for NotificationIntent {}
