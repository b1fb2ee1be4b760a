//! Reducer for the notification queue.

use crate::ui::mvi::Reducer;

use super::intent::NotificationIntent;
use super::state::{Notification, NotificationState, MAX_VISIBLE};

/// Pure: the caller supplies the clock through the intent.
pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Push {
                kind,
                message,
                now,
                duration,
            } => {
                let mut entries = state.entries;
                entries.push(Notification {
                    kind,
                    message,
                    shown_at: now,
                    duration,
                });
                let overflow = entries.len().saturating_sub(MAX_VISIBLE);
                entries.drain(..overflow);
                NotificationState { entries }
            }
            NotificationIntent::Expire { now } => {
                if state.entries.iter().all(|n| !n.is_expired(now)) {
                    return state;
                }
                NotificationState {
                    entries: state
                        .entries
                        .into_iter()
                        .filter(|n| !n.is_expired(now))
                        .collect(),
                }
            }
            NotificationIntent::DismissAll => NotificationState::default(),
        }
    }
}
