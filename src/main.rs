use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};

use text_utils::cli::{Cli, CliCommand};
use text_utils::clipboard::system_clipboard;
use text_utils::commands;
use text_utils::config::Config;
use text_utils::logging::{init_tracing, LogSink};
use text_utils::ui::runtime;
use text_utils::ui::theme::ThemeMode;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let theme = if cli.dark {
        ThemeMode::Dark
    } else {
        config.ui.theme
    };

    match cli.command.unwrap_or(CliCommand::Tui) {
        CliCommand::Tui => {
            init_tracing(&config.logging, LogSink::FileOnly)?;
            runtime::run(&config, theme, system_clipboard())?;
        }
        CliCommand::Transform { action } => {
            init_tracing(&config.logging, LogSink::FileOrStderr)?;
            let input = read_stdin()?;
            let output = commands::transform(&input, action)?;
            write_stdout(&output)?;
        }
        CliCommand::Stats { json } => {
            init_tracing(&config.logging, LogSink::FileOrStderr)?;
            let input = read_stdin()?;
            let output = commands::stats(&input, json)?;
            write_stdout(&output)?;
        }
    }

    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn write_stdout(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.is_empty() && !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
