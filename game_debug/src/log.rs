//! Log sink for the game debug layer
//!
//! This module provides the log side of the debug facade:
//! - Customizable sink via the Logger trait
//! - Severity levels (Info, Warning, Error)
//! - Fixed categories for game and benchmark messages
//! - Colored console output by default
//! - A bridge to the `log` crate for games that already install a backend

use colored::*;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use chrono::{DateTime, Local};
use crate::error::{Error, Result};

/// Logger trait for custom log sinks
///
/// Implement this trait to route debug messages into an engine's own log
/// subsystem (file logging, in-game console, etc.)
///
/// # Example
///
/// ```no_run
/// use game_debug::debug::log::{Logger, LogEntry};
///
/// struct ConsoleWindowLogger;
///
/// impl Logger for ConsoleWindowLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push to the in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The fully formatted log entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry handed to a Logger
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Info, Warning, Error)
    pub severity: LogSeverity,

    /// Category name (e.g., "Debug", "Benchmark")
    pub category: String,

    /// Timestamp when the entry was created
    pub timestamp: SystemTime,

    /// Final message text (subject label and print options already applied)
    pub message: String,

    /// Source file, when the message was emitted through a call-site macro
    pub file: Option<&'static str>,

    /// Source line, when the message was emitted through a call-site macro
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogSeverity {
    /// Regular informational messages
    Info,

    /// Potential issues
    Warning,

    /// Errors
    Error,
}

impl LogSeverity {
    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSeverity::Info => "info",
            LogSeverity::Warning => "warning",
            LogSeverity::Error => "error",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogSeverity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" | "log" | "display" => Ok(LogSeverity::Info),
            "warning" | "warn" => Ok(LogSeverity::Warning),
            "error" => Ok(LogSeverity::Error),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Category a message is filed under
///
/// The actual category names come from `DebugConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogCategory {
    /// Regular game messages
    #[default]
    Game,

    /// Benchmark and timing messages
    Benchmark,
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Info: green
/// - Warning: yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [category] message`
/// - With call site: `[timestamp] [SEVERITY] [category] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Format an entry without colors (used by the console output and tests)
    pub fn format_plain(entry: &LogEntry) -> String {
        let timestamp = format_timestamp(entry.timestamp);
        let severity = severity_label(entry.severity);

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, entry.category, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, severity, entry.category, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let timestamp = format_timestamp(entry.timestamp);

        let severity_str = match entry.severity {
            LogSeverity::Info => severity_label(entry.severity).green(),
            LogSeverity::Warning => severity_label(entry.severity).yellow(),
            LogSeverity::Error => severity_label(entry.severity).red().bold(),
        };

        let category = entry.category.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                category,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                category,
                entry.message
            );
        }
    }
}

/// Logger that forwards entries to the `log` crate facade
///
/// The category name becomes the record target, so a backend such as
/// `env_logger` can filter with `RUST_LOG=Debug=warn,Benchmark=info`.
pub struct LogCrateLogger;

impl LogCrateLogger {
    /// Map a severity onto a `log` level
    pub fn level_for(severity: LogSeverity) -> ::log::Level {
        match severity {
            LogSeverity::Info => ::log::Level::Info,
            LogSeverity::Warning => ::log::Level::Warn,
            LogSeverity::Error => ::log::Level::Error,
        }
    }
}

impl Logger for LogCrateLogger {
    fn log(&self, entry: &LogEntry) {
        let level = Self::level_for(entry.severity);
        if level > ::log::max_level() {
            return;
        }

        ::log::logger().log(
            &::log::Record::builder()
                .args(format_args!("{}", entry.message))
                .level(level)
                .target(&entry.category)
                .file(entry.file)
                .line(entry.line)
                .build(),
        );
    }
}

/// Fixed-width severity label
fn severity_label(severity: LogSeverity) -> &'static str {
    match severity {
        LogSeverity::Info => "INFO ",
        LogSeverity::Warning => "WARN ",
        LogSeverity::Error => "ERROR",
    }
}

/// Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
fn format_timestamp(timestamp: SystemTime) -> String {
    let datetime: DateTime<Local> = timestamp.into();
    datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
