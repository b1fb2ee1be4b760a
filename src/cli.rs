//! Command line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::text::TextIntent;

#[derive(Debug, Parser)]
#[command(
    name = "text-utils",
    version,
    about = "Transform text and count its words, characters and reading time"
)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/text-utils/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Start in dark mode, overriding the configured theme
    #[arg(long)]
    pub dark: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Interactive editor (default)
    Tui,
    /// Apply one action to stdin and print the result
    Transform {
        /// uppercase, lowercase, clear or remove-extra-spaces
        #[arg(value_parser = parse_action)]
        action: TextIntent,
    },
    /// Print word count, character count and reading time for stdin
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_action(name: &str) -> Result<TextIntent, String> {
    TextIntent::from_name(name).ok_or_else(|| {
        format!(
            "unknown action '{name}' (expected uppercase, lowercase, clear or remove-extra-spaces)"
        )
    })
}
