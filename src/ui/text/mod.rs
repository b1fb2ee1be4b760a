//! Text feature module.
//!
//! Holds the single piece of session state (the current text) and the
//! transformations that can be applied to it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The current text value
//! - `intent.rs` - Edits and transformation requests
//! - `reducer.rs` - The transition table (pure, no side effects)
//! - `stats.rs` - Word/character counts and reading time, derived on read

mod intent;
mod reducer;
mod state;
pub mod stats;

pub use intent::TextIntent;
pub use reducer::{is_blank, remove_extra_spaces, TextReducer};
pub use state::TextState;
pub use stats::TextStats;
