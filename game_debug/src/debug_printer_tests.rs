//! Unit tests for debug_printer.rs
//!
//! Tests log formatting, categories, severity filtering and screen dispatch.

use super::*;
use crate::subject::{Named, Component};
use crate::overlay::ScreenMessageQueue;
use std::sync::Mutex;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Logger capturing entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn capturing_printer(config: DebugConfig) -> (DebugPrinter, Arc<Mutex<Vec<LogEntry>>>) {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let printer = DebugPrinter::new()
        .with_config(config)
        .with_logger(CaptureLogger { entries: entries.clone() });
    (printer, entries)
}

struct Actor(&'static str);

impl Named for Actor {
    fn name(&self) -> &str {
        self.0
    }
}

struct Weapon<'a> {
    owner: &'a Actor,
}

impl Named for Weapon<'_> {
    fn name(&self) -> &str {
        "WeaponComponent"
    }
}

impl Component for Weapon<'_> {
    fn owner(&self) -> Option<&dyn Named> {
        Some(self.owner as &dyn Named)
    }
}

// ============================================================================
// LOG TESTS
// ============================================================================

#[test]
fn test_plain_message_is_verbatim() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.log(LogMessage::new(LogSeverity::Warning, "low health"));

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, "Debug");
    assert_eq!(entries[0].severity, LogSeverity::Warning);
    assert_eq!(entries[0].message, "low health");
    assert!(entries[0].file.is_none());
    assert!(entries[0].line.is_none());
}

#[test]
fn test_object_subject_prefixes_name() {
    let (printer, entries) = capturing_printer(DebugConfig::default());
    let player = Actor("Player_0");

    printer.log(LogMessage::new(LogSeverity::Info, "jumped").subject(Subject::object(&player)));

    assert_eq!(entries.lock().unwrap()[0].message, "Player_0: jumped");
}

#[test]
fn test_absent_subject_prefixes_none() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.log(LogMessage::new(LogSeverity::Error, "missing target").subject(Subject::Object(None)));

    let entries = entries.lock().unwrap();
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert_eq!(entries[0].message, "None: missing target");
}

#[test]
fn test_component_subject_includes_owner() {
    let (printer, entries) = capturing_printer(DebugConfig::default());
    let hero = Actor("Hero");
    let weapon = Weapon { owner: &hero };

    printer.log(LogMessage::new(LogSeverity::Info, "reloaded").subject(Subject::component(&weapon)));

    assert_eq!(entries.lock().unwrap()[0].message, "WeaponComponent [Owner: Hero]: reloaded");
}

#[test]
fn test_empty_options_same_as_no_options() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.log(LogMessage::new(LogSeverity::Info, "tick"));
    printer.log(LogMessage::new(LogSeverity::Info, "tick").options(PrintOptions::empty()));

    let entries = entries.lock().unwrap();
    assert_eq!(entries[0].message, entries[1].message);
}

#[test]
fn test_options_appended_after_label_and_message() {
    let (printer, entries) = capturing_printer(DebugConfig::default());
    let player = Actor("Player_0");
    let site = CallSite::new("player.rs", 88).with_function("game::player::die");

    printer.log(
        LogMessage::new(LogSeverity::Info, "died")
            .subject(Subject::object(&player))
            .options(PrintOptions::FUNCTION_NAME | PrintOptions::LINE_NUMBER)
            .at(site),
    );

    let entries = entries.lock().unwrap();
    assert_eq!(
        entries[0].message,
        "Player_0: died line number: 88 function name: game::player::die"
    );
    assert_eq!(entries[0].file, Some("player.rs"));
    assert_eq!(entries[0].line, Some(88));
}

#[test]
fn test_date_and_time_options() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.log(LogMessage::new(LogSeverity::Info, "saved").options(PrintOptions::DATE | PrintOptions::TIME));

    let message = entries.lock().unwrap()[0].message.clone();
    assert!(message.starts_with("saved date: "));
    let date_at = message.find(" date: ").unwrap();
    let time_at = message.find(" time: ").unwrap();
    assert!(date_at < time_at);
}

#[test]
fn test_default_options_from_config() {
    let config = DebugConfig::default().with_default_options(PrintOptions::LINE_NUMBER);
    let (printer, entries) = capturing_printer(config);

    printer.log(LogMessage::new(LogSeverity::Info, "hit").at(CallSite::new("combat.rs", 5)));

    assert_eq!(entries.lock().unwrap()[0].message, "hit line number: 5");
}

#[test]
fn test_severity_shortcuts() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.info("a");
    printer.warning("b");
    printer.error("c");

    let severities: Vec<LogSeverity> = entries.lock().unwrap().iter().map(|e| e.severity).collect();
    assert_eq!(severities, vec![LogSeverity::Info, LogSeverity::Warning, LogSeverity::Error]);
}

#[test]
fn test_bench_category() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.bench("frame 16ms");
    printer.bench_warning("frame 33ms");
    printer.bench_error("frame 120ms");

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.category == "Benchmark"));
    assert_eq!(entries[0].message, "frame 16ms");
    assert_eq!(entries[2].severity, LogSeverity::Error);
}

#[test]
fn test_custom_category_names() {
    let config = DebugConfig::default().with_game_category("Gameplay");
    let (printer, entries) = capturing_printer(config);

    printer.info("hello");

    assert_eq!(entries.lock().unwrap()[0].category, "Gameplay");
}

#[test]
fn test_min_severity_filters() {
    let config = DebugConfig::default().with_min_severity(LogSeverity::Warning);
    let (printer, entries) = capturing_printer(config);

    printer.info("dropped");
    printer.warning("kept");
    printer.error("kept too");

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "kept");
}

#[test]
fn test_reset_logger_stops_capture() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.info("captured");
    printer.reset_logger();
    printer.info("goes to console");

    assert_eq!(entries.lock().unwrap().len(), 1);
}

#[test]
fn test_log_macros_attach_call_site() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    crate::debug_warning!(printer, "ammo {}", 3);

    let entries = entries.lock().unwrap();
    assert_eq!(entries[0].severity, LogSeverity::Warning);
    assert_eq!(entries[0].message, "ammo 3");
    assert!(entries[0].file.unwrap().ends_with("debug_printer_tests.rs"));
    assert!(entries[0].line.is_some());
}

#[test]
fn test_log_message_macro_function_name() {
    let (printer, entries) = capturing_printer(DebugConfig::default());

    printer.log(
        crate::log_message!(LogSeverity::Info, "checked").options(PrintOptions::FUNCTION_NAME),
    );

    let message = entries.lock().unwrap()[0].message.clone();
    assert!(
        message.ends_with("test_log_message_macro_function_name"),
        "unexpected message: {}",
        message
    );
}

// ============================================================================
// SCREEN TESTS
// ============================================================================

#[test]
fn test_screen_without_overlay_is_noop() {
    let printer = DebugPrinter::new();
    assert!(!printer.has_overlay());

    printer.screen(ScreenText::new("nobody sees this"));
    printer.screen_red("nor this");
}

#[test]
fn test_screen_defaults() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new().with_overlay(overlay.clone());

    printer.screen(ScreenText::new("hello"));

    let messages = overlay.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].key, MessageKey::New);
    assert_eq!(messages[0].duration, 5.0);
    assert_eq!(messages[0].color, Color::WHITE);
    assert_eq!(messages[0].text, "hello");
}

#[test]
fn test_screen_color_and_duration() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new().with_overlay(overlay.clone());

    printer.screen(ScreenText::new("level up!").color(Color::GREEN).duration(3.0));

    let messages = overlay.messages();
    assert_eq!(messages[0].color, Color::GREEN);
    assert_eq!(messages[0].duration, 3.0);
    assert_eq!(messages[0].text, "level up!");
}

#[test]
fn test_screen_subject_label() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new().with_overlay(overlay.clone());
    let boss = Actor("Boss");

    printer.screen(ScreenText::new("enraged").subject(Subject::object(&boss)));
    printer.screen(ScreenText::new("gone").subject(Subject::Object(None)));

    let messages = overlay.messages();
    assert_eq!(messages[0].text, "Boss: enraged");
    assert_eq!(messages[1].text, "None: gone");
}

#[test]
fn test_screen_color_shortcuts() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new().with_overlay(overlay.clone());

    printer.screen_red("r");
    printer.screen_blue("b");
    printer.screen_green("g");

    let colors: Vec<Color> = overlay.messages().iter().map(|m| m.color).collect();
    assert_eq!(colors, vec![Color::RED, Color::BLUE, Color::GREEN]);
}

#[test]
fn test_screen_config_defaults() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let config = DebugConfig::default()
        .with_screen_color(Color::ORANGE)
        .with_screen_duration(1.0);
    let printer = DebugPrinter::new().with_config(config).with_overlay(overlay.clone());

    printer.screen(ScreenText::new("tip"));

    let messages = overlay.messages();
    assert_eq!(messages[0].color, Color::ORANGE);
    assert_eq!(messages[0].duration, 1.0);
}

#[test]
fn test_screen_messages_never_replace() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new().with_overlay(overlay.clone());

    printer.screen(ScreenText::new("same"));
    printer.screen(ScreenText::new("same"));

    assert_eq!(overlay.len(), 2);
}

#[test]
fn test_clear_overlay() {
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new().with_overlay(overlay.clone());
    assert!(printer.has_overlay());

    printer.clear_overlay();
    printer.screen(ScreenText::new("dropped"));

    assert!(!printer.has_overlay());
    assert!(overlay.is_empty());
}

#[test]
fn test_printer_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DebugPrinter>();
}

#[test]
fn test_attach_shared_dyn_overlay() {
    let queue = Arc::new(ScreenMessageQueue::new());
    let shared: Arc<dyn Overlay> = queue.clone();
    let printer = DebugPrinter::new().with_overlay(shared.clone());

    printer.screen_blue("from host");
    printer.clear_overlay();
    printer.set_overlay(shared);
    printer.screen_blue("again");

    let texts: Vec<String> = queue.messages().into_iter().map(|m| m.text).collect();
    assert_eq!(texts, vec!["from host", "again"]);
}
