//! Debug printer: the facade game code talks to.
//!
//! Formats a message (subject label, print options) and dispatches it to the
//! log sink or to the on-screen overlay. Both sinks are injected and can be
//! swapped at runtime. Nothing here can fail: a poisoned lock, a missing
//! overlay or a missing subject only ever degrade the output.

use std::sync::{Arc, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};
use crate::config::DebugConfig;
use crate::log::{Logger, LogEntry, LogSeverity, LogCategory, DefaultLogger};
use crate::overlay::{Overlay, ScreenMessage, MessageKey, Color};
use crate::print_options::{PrintOptions, CallSite, render_options};
use crate::subject::{Subject, prefix_label};

// ===== MESSAGES =====

/// A log message before formatting
///
/// # Example
///
/// ```no_run
/// use game_debug::debug::{LogMessage, PrintOptions, Subject};
/// use game_debug::debug::log::LogSeverity;
///
/// let player = "Player_0".to_string();
/// let message = LogMessage::new(LogSeverity::Warning, "low health")
///     .subject(Subject::object(&player))
///     .options(PrintOptions::TIME);
/// ```
#[derive(Debug, Clone)]
pub struct LogMessage<'a> {
    pub severity: LogSeverity,
    pub category: LogCategory,
    pub text: String,
    pub subject: Option<Subject<'a>>,
    pub options: PrintOptions,
    pub call_site: Option<CallSite>,
}

impl<'a> LogMessage<'a> {
    pub fn new(severity: LogSeverity, text: impl Into<String>) -> Self {
        Self {
            severity,
            category: LogCategory::Game,
            text: text.into(),
            subject: None,
            options: PrintOptions::empty(),
            call_site: None,
        }
    }

    pub fn subject(mut self, subject: Subject<'a>) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn options(mut self, options: PrintOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach the emitting call site (see `call_site!`)
    pub fn at(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    pub fn category(mut self, category: LogCategory) -> Self {
        self.category = category;
        self
    }
}

/// An on-screen message before formatting
///
/// Color and duration fall back to the printer's configuration when unset.
#[derive(Debug, Clone)]
pub struct ScreenText<'a> {
    pub text: String,
    pub subject: Option<Subject<'a>>,
    pub color: Option<Color>,
    pub duration: Option<f32>,
}

impl<'a> ScreenText<'a> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subject: None,
            color: None,
            duration: None,
        }
    }

    pub fn subject(mut self, subject: Subject<'a>) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Display duration in seconds
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }
}

// ===== PRINTER =====

/// Debug output facade
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use game_debug::debug::{DebugPrinter, ScreenText};
/// use game_debug::debug::overlay::{Color, ScreenMessageQueue};
///
/// let overlay = Arc::new(ScreenMessageQueue::new());
/// let printer = DebugPrinter::new().with_overlay(overlay.clone());
///
/// printer.warning("low health");
/// printer.screen(ScreenText::new("level up!").color(Color::GREEN).duration(3.0));
///
/// // Once per frame
/// overlay.update(1.0 / 60.0);
/// ```
pub struct DebugPrinter {
    logger: RwLock<Box<dyn Logger>>,
    overlay: RwLock<Option<Arc<dyn Overlay>>>,
    config: DebugConfig,
}

impl DebugPrinter {
    /// Printer with the default console logger, no overlay and default config
    pub fn new() -> Self {
        Self {
            logger: RwLock::new(Box::new(DefaultLogger)),
            overlay: RwLock::new(None),
            config: DebugConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DebugConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger<L: Logger + 'static>(self, logger: L) -> Self {
        self.set_logger(logger);
        self
    }

    pub fn with_overlay(self, overlay: Arc<dyn Overlay>) -> Self {
        self.set_overlay(overlay);
        self
    }

    pub fn config(&self) -> &DebugConfig {
        &self.config
    }

    // ===== SINK MANAGEMENT =====

    /// Replace the log sink
    pub fn set_logger<L: Logger + 'static>(&self, logger: L) {
        if let Ok(mut lock) = self.logger.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset the log sink to DefaultLogger
    pub fn reset_logger(&self) {
        if let Ok(mut lock) = self.logger.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Attach the overlay (typically once the renderer is up)
    pub fn set_overlay(&self, overlay: Arc<dyn Overlay>) {
        if let Ok(mut lock) = self.overlay.write() {
            *lock = Some(overlay);
        }
    }

    /// Detach the overlay; screen messages become no-ops
    pub fn clear_overlay(&self) {
        if let Ok(mut lock) = self.overlay.write() {
            *lock = None;
        }
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.read().map(|lock| lock.is_some()).unwrap_or(false)
    }

    // ===== LOG =====

    /// Format and write a message to the log sink
    ///
    /// Text is `[label: ]message[options]`. Messages below the configured
    /// minimum severity are dropped.
    pub fn log(&self, message: LogMessage<'_>) {
        if message.severity < self.config.min_severity {
            return;
        }

        let timestamp = SystemTime::now();
        let options = message.options | self.config.default_options;

        let mut text = prefix_label(message.subject.as_ref(), &message.text);
        if !options.is_empty() {
            let now = DateTime::<Local>::from(timestamp).naive_local();
            text.push_str(&render_options(options, message.call_site.as_ref(), now));
        }

        let entry = LogEntry {
            severity: message.severity,
            category: self.config.category_name(message.category).to_string(),
            timestamp,
            message: text,
            file: message.call_site.map(|site| site.file),
            line: message.call_site.map(|site| site.line),
        };

        if let Ok(logger) = self.logger.read() {
            logger.log(&entry);
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.log(LogMessage::new(LogSeverity::Info, text));
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.log(LogMessage::new(LogSeverity::Warning, text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.log(LogMessage::new(LogSeverity::Error, text));
    }

    pub fn bench(&self, text: impl Into<String>) {
        self.log(LogMessage::new(LogSeverity::Info, text).category(LogCategory::Benchmark));
    }

    pub fn bench_warning(&self, text: impl Into<String>) {
        self.log(LogMessage::new(LogSeverity::Warning, text).category(LogCategory::Benchmark));
    }

    pub fn bench_error(&self, text: impl Into<String>) {
        self.log(LogMessage::new(LogSeverity::Error, text).category(LogCategory::Benchmark));
    }

    // ===== SCREEN =====

    /// Send a message to the overlay
    ///
    /// Always submits a new entry. Does nothing when no overlay is attached.
    pub fn screen(&self, text: ScreenText<'_>) {
        let overlay = match self.overlay.read() {
            Ok(lock) => lock.clone(),
            Err(_) => None,
        };
        let Some(overlay) = overlay else {
            return;
        };

        overlay.add_message(ScreenMessage {
            key: MessageKey::New,
            duration: text.duration.unwrap_or(self.config.screen_duration),
            color: text.color.unwrap_or(self.config.screen_color),
            text: prefix_label(text.subject.as_ref(), &text.text),
        });
    }

    pub fn screen_red(&self, text: impl Into<String>) {
        self.screen(ScreenText::new(text).color(Color::RED));
    }

    pub fn screen_blue(&self, text: impl Into<String>) {
        self.screen(ScreenText::new(text).color(Color::BLUE));
    }

    pub fn screen_green(&self, text: impl Into<String>) {
        self.screen(ScreenText::new(text).color(Color::GREEN));
    }
}

impl Default for DebugPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "debug_printer_tests.rs"]
mod tests;
