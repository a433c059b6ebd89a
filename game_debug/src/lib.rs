/*!
# Game Debug

Debug output helpers for games.

Game code writes formatted messages either to a categorized log or to an
on-screen overlay, optionally tagged with the object or component they are
about. Both sinks are traits injected into the `DebugPrinter`, so the same
calls work against an engine's own log/overlay, the bundled console
implementations, or test doubles.

## Architecture

- **DebugPrinter**: the facade (log + screen dispatch)
- **Logger**: log sink trait (`DefaultLogger`, `LogCrateLogger`)
- **Overlay**: screen sink trait (`ConsoleOverlay`, `ScreenMessageQueue`)
- **Subject**: object / component label in front of a message
- **PrintOptions**: line number, function name, date and time metadata
*/

// Internal modules
mod error;
mod config;
mod debug_printer;
mod macros;
pub mod log;
pub mod overlay;
pub mod print_options;
pub mod subject;

// Main debug namespace module
pub mod debug {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{DebugConfig, DEFAULT_SCREEN_DURATION};

    // Facade
    pub use crate::debug_printer::{DebugPrinter, LogMessage, ScreenText};

    // Message metadata
    pub use crate::print_options::{PrintOptions, CallSite, render_options, parse_print_options};
    pub use crate::subject::{Named, Component, Subject, NONE_LABEL};

    // Log sink sub-module
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, LogCategory, DefaultLogger, LogCrateLogger};
    }

    // Overlay sub-module
    pub mod overlay {
        pub use crate::overlay::*;
    }
}
