//! Configuration for the debug printer.
//!
//! All fields have defaults matching the usual game setup: game messages in
//! the "Debug" category, benchmark messages in "Benchmark", white screen
//! messages shown for 5 seconds.

use crate::log::{LogCategory, LogSeverity};
use crate::overlay::Color;
use crate::print_options::PrintOptions;

/// Default on-screen duration in seconds
pub const DEFAULT_SCREEN_DURATION: f32 = 5.0;

/// Debug printer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Category name for game messages
    pub game_category: String,

    /// Category name for benchmark messages
    pub bench_category: String,

    /// Messages below this severity are dropped
    pub min_severity: LogSeverity,

    /// Options applied to every log message, on top of per-message options
    pub default_options: PrintOptions,

    /// Screen color when a message does not set one
    pub screen_color: Color,

    /// Screen duration (seconds) when a message does not set one
    pub screen_duration: f32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            game_category: "Debug".to_string(),
            bench_category: "Benchmark".to_string(),
            min_severity: LogSeverity::Info,
            default_options: PrintOptions::empty(),
            screen_color: Color::WHITE,
            screen_duration: DEFAULT_SCREEN_DURATION,
        }
    }
}

impl DebugConfig {
    pub fn with_game_category(mut self, name: impl Into<String>) -> Self {
        self.game_category = name.into();
        self
    }

    pub fn with_bench_category(mut self, name: impl Into<String>) -> Self {
        self.bench_category = name.into();
        self
    }

    pub fn with_min_severity(mut self, severity: LogSeverity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn with_default_options(mut self, options: PrintOptions) -> Self {
        self.default_options = options;
        self
    }

    pub fn with_screen_color(mut self, color: Color) -> Self {
        self.screen_color = color;
        self
    }

    pub fn with_screen_duration(mut self, seconds: f32) -> Self {
        self.screen_duration = seconds;
        self
    }

    /// Category name for `category`
    pub fn category_name(&self, category: LogCategory) -> &str {
        match category {
            LogCategory::Game => &self.game_category,
            LogCategory::Benchmark => &self.bench_category,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
