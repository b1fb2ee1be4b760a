use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::ThemeMode;
use std::io;
use std::time::Instant;

/// Run the interactive editor until the user quits.
pub fn run(config: &Config, theme: ThemeMode, clipboard: Box<dyn ClipboardSink>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app =
        App::new(theme, clipboard).with_notification_duration(config.notifications.duration());
    let events = EventHandler::new(tick_rate);
    tracing::info!(?theme, "Session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            // Next draw picks up the new size
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Session ended");
    drop(guard);
    Ok(())
}
