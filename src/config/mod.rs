//! Configuration: TOML file, defaults, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, NotificationConfig, UiConfig};
