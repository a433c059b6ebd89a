//! Error types for the game debug layer
//!
//! Emitting messages never fails. These errors only come out of the parsing
//! helpers used to build a `DebugConfig` from text (severity names, print
//! option lists, hex colors).

use std::fmt;

/// Result type for game debug operations
pub type Result<T> = std::result::Result<T, Error>;

/// Game debug errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown severity name (expected info, warning or error)
    InvalidSeverity(String),

    /// Unknown print option name
    InvalidPrintOption(String),

    /// Malformed color string (expected #rrggbb or #rrggbbaa)
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSeverity(name) => write!(f, "Invalid severity: {}", name),
            Error::InvalidPrintOption(name) => write!(f, "Invalid print option: {}", name),
            Error::InvalidColor(value) => write!(f, "Invalid color: {}", value),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
