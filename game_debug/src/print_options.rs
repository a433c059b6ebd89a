//! Print options: metadata appended to a log message.
//!
//! Options are a flag set. Whatever order the flags were combined in, the
//! rendered fragments always follow declaration order:
//! line number, function name, date, time.

use bitflags::bitflags;
use chrono::NaiveDateTime;
use crate::error::{Error, Result};

bitflags! {
    /// Metadata appended to a log message
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PrintOptions: u8 {
        /// Line of the emitting code
        const LINE_NUMBER = 1 << 0;
        /// Name of the emitting function
        const FUNCTION_NAME = 1 << 1;
        /// Current date (DD/MM/YYYY)
        const DATE = 1 << 2;
        /// Current time of day (HH:MM:SS.mmm)
        const TIME = 1 << 3;
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions::empty()
    }
}

/// Location of the code that emitted a message.
///
/// Built by the `call_site!` macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: Option<&'static str>,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line, function: None }
    }

    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

const UNKNOWN: &str = "unknown";

/// Render the metadata fragment for `options`.
///
/// Returns an empty string for an empty set. Each fragment starts with a
/// space so the result can be appended directly to the message.
pub fn render_options(
    options: PrintOptions,
    call_site: Option<&CallSite>,
    now: NaiveDateTime,
) -> String {
    let mut out = String::new();

    if options.contains(PrintOptions::LINE_NUMBER) {
        match call_site {
            Some(site) => out.push_str(&format!(" line number: {}", site.line)),
            None => out.push_str(&format!(" line number: {}", UNKNOWN)),
        }
    }
    if options.contains(PrintOptions::FUNCTION_NAME) {
        let function = call_site.and_then(|site| site.function).unwrap_or(UNKNOWN);
        out.push_str(&format!(" function name: {}", function));
    }
    if options.contains(PrintOptions::DATE) {
        out.push_str(&format!(" date: {}", now.format("%d/%m/%Y")));
    }
    if options.contains(PrintOptions::TIME) {
        out.push_str(&format!(" time: {}", now.format("%H:%M:%S%.3f")));
    }

    out
}

/// Parse a list of option names such as `"line | function, time"`.
///
/// Accepted names: `line`, `line_number`, `function`, `function_name`,
/// `date`, `time`, `none`. Separators are `|`, `,` and whitespace.
pub fn parse_print_options(s: &str) -> Result<PrintOptions> {
    let mut options = PrintOptions::empty();

    for name in s.split(|c: char| c == '|' || c == ',' || c.is_whitespace()) {
        if name.is_empty() {
            continue;
        }
        let flag = match name.to_ascii_lowercase().as_str() {
            "line" | "line_number" => PrintOptions::LINE_NUMBER,
            "function" | "function_name" => PrintOptions::FUNCTION_NAME,
            "date" => PrintOptions::DATE,
            "time" => PrintOptions::TIME,
            "none" => PrintOptions::empty(),
            _ => return Err(Error::InvalidPrintOption(name.to_string())),
        };
        options |= flag;
    }

    Ok(options)
}

#[cfg(test)]
#[path = "print_options_tests.rs"]
mod tests;
