//! Text utilities: a pure text reducer with live statistics, driven by a
//! terminal editor or by one-shot commands over stdin.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
