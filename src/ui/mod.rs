pub mod app;
pub mod command;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notification;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod text;
pub mod theme;
