mod common;

use common::{spy_app, spy_app_with_text, SpyClipboard};
use std::time::{Duration, Instant};
use text_utils::ui::app::App;
use text_utils::ui::command::{Command, CommandOutcome};
use text_utils::ui::editor::EditOp;
use text_utils::ui::notification::{NotificationKind, COPIED_MESSAGE, EMPTY_TEXT_MESSAGE};
use text_utils::ui::text::TextIntent;
use text_utils::ui::theme::ThemeMode;

fn only_notification(app: &App) -> (NotificationKind, String) {
    let entries = &app.notifications().entries;
    assert_eq!(entries.len(), 1, "expected exactly one notification");
    (entries[0].kind, entries[0].message.clone())
}

#[test]
fn uppercase_on_empty_text_is_blocked() {
    let (mut app, writes) = spy_app();
    let outcome = app.trigger(Command::Uppercase, Instant::now());

    assert_eq!(outcome, CommandOutcome::Blocked);
    assert_eq!(app.text(), "");
    assert_eq!(
        only_notification(&app),
        (NotificationKind::Warning, EMPTY_TEXT_MESSAGE.to_string())
    );
    assert!(writes.borrow().is_empty());
}

#[test]
fn every_command_is_gated_on_whitespace_only_text() {
    for command in Command::ALL {
        let (mut app, writes) = spy_app_with_text(" \t\n ");
        assert_eq!(app.trigger(command, Instant::now()), CommandOutcome::Blocked);
        assert_eq!(app.text(), " \t\n ", "{command:?} changed blank text");
        assert!(writes.borrow().is_empty());
    }
}

#[test]
fn typing_is_never_gated() {
    let (mut app, _) = spy_app();
    app.edit(EditOp::Insert(' '));
    assert_eq!(app.text(), " ");
    assert!(app.notifications().is_empty());
}

#[test]
fn remove_extra_spaces_through_gate() {
    let (mut app, _) = spy_app_with_text("  a   b  ");
    assert_eq!(
        app.trigger(Command::RemoveExtraSpaces, Instant::now()),
        CommandOutcome::Applied
    );
    assert_eq!(app.text(), "a b");
    assert!(app.notifications().is_empty());
}

#[test]
fn lowercase_then_copy() {
    let (mut app, writes) = spy_app_with_text("Hi There");
    let now = Instant::now();

    assert_eq!(app.trigger(Command::Lowercase, now), CommandOutcome::Applied);
    assert_eq!(app.text(), "hi there");

    assert_eq!(app.trigger(Command::Copy, now), CommandOutcome::Copied);
    assert_eq!(*writes.borrow(), vec!["hi there".to_string()]);
    assert_eq!(
        only_notification(&app),
        (NotificationKind::Success, COPIED_MESSAGE.to_string())
    );
    // Copy reads the text, it does not change it.
    assert_eq!(app.text(), "hi there");
}

#[test]
fn copy_writes_untrimmed_text() {
    let (mut app, writes) = spy_app_with_text("  padded  ");
    app.trigger(Command::Copy, Instant::now());
    assert_eq!(*writes.borrow(), vec!["  padded  ".to_string()]);
}

#[test]
fn copy_failure_warns() {
    let mut app = App::new(ThemeMode::Light, Box::new(SpyClipboard::failing()));
    app.dispatch_text(TextIntent::Change("text".into()));
    assert_eq!(
        app.trigger(Command::Copy, Instant::now()),
        CommandOutcome::CopyFailed
    );
    let (kind, _) = only_notification(&app);
    assert_eq!(kind, NotificationKind::Warning);
}

#[test]
fn notifications_expire_after_duration() {
    let (mut app, _) = spy_app();
    let app_duration = Duration::from_millis(3000);
    let start = Instant::now();
    app.trigger(Command::Clear, start);
    assert_eq!(app.notifications().len(), 1);

    app.on_tick(start + app_duration - Duration::from_millis(1));
    assert_eq!(app.notifications().len(), 1);

    app.on_tick(start + app_duration);
    assert!(app.notifications().is_empty());
}

#[test]
fn configured_duration_is_used() {
    let (clipboard, _) = SpyClipboard::new();
    let mut app = App::new(ThemeMode::Light, Box::new(clipboard))
        .with_notification_duration(Duration::from_millis(500));
    let start = Instant::now();
    app.trigger(Command::Uppercase, start);
    app.on_tick(start + Duration::from_millis(500));
    assert!(app.notifications().is_empty());
}

#[test]
fn theme_toggle_leaves_text_alone() {
    let (mut app, _) = spy_app_with_text("Same Text");
    app.toggle_theme();
    assert_eq!(app.theme(), ThemeMode::Dark);
    assert_eq!(app.text(), "Same Text");
    app.toggle_theme();
    assert_eq!(app.theme(), ThemeMode::Light);
}

#[test]
fn stats_recomputed_after_each_action() {
    let (mut app, _) = spy_app_with_text("one  two\tthree");
    assert_eq!(app.stats().words, 2);
    app.trigger(Command::RemoveExtraSpaces, Instant::now());
    assert_eq!(app.stats().words, 3);
    assert_eq!(app.stats().characters, 13);
}

#[test]
fn cursor_moves_to_end_after_transform() {
    let (mut app, _) = spy_app_with_text("straße");
    app.edit(EditOp::Home);
    assert_eq!(app.cursor(), 0);
    app.trigger(Command::Uppercase, Instant::now());
    assert_eq!(app.text(), "STRASSE");
    assert_eq!(app.cursor(), "STRASSE".len());
}

#[test]
fn paste_normalizes_line_endings() {
    let (mut app, _) = spy_app();
    app.on_paste("a\r\nb\rc");
    assert_eq!(app.text(), "a\nb\nc");
    assert_eq!(app.cursor(), 5);
}

#[test]
fn next_line_char_is_not_blank() {
    // U+0085 is not stripped by trim, so the gate lets actions through.
    let (mut app, writes) = spy_app_with_text("\u{85}");
    assert_eq!(app.trigger(Command::Copy, Instant::now()), CommandOutcome::Copied);
    assert_eq!(*writes.borrow(), vec!["\u{85}".to_string()]);
}

#[test]
fn tab_keeps_text_and_stats() {
    let (mut app, _) = spy_app();
    app.edit(EditOp::Insert('a'));
    app.edit(EditOp::Insert('\t'));
    app.edit(EditOp::Insert('b'));
    assert_eq!(app.text(), "a\tb");
    assert_eq!(app.cursor(), 3);
    assert_eq!(app.stats().words, 1);
}
