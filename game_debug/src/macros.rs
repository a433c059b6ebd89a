//! Call-site macros
//!
//! These capture file, line and enclosing function of the caller so the
//! `LINE_NUMBER` and `FUNCTION_NAME` print options have something to show.

/// Fully qualified name of the enclosing function
///
/// # Example
///
/// ```no_run
/// fn spawn_wave() {
///     let name = game_debug::function_name!();
///     assert!(name.ends_with("spawn_wave"));
/// }
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// `CallSite` of the macro invocation
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::debug::CallSite::new(file!(), line!()).with_function($crate::function_name!())
    };
}

/// Build a `LogMessage` with the call site attached
///
/// # Example
///
/// ```no_run
/// use game_debug::debug::{PrintOptions, Subject};
/// use game_debug::debug::log::LogSeverity;
///
/// let door = "Door_2".to_string();
/// let message = game_debug::log_message!(LogSeverity::Info, "opened after {}s", 3)
///     .subject(Subject::object(&door))
///     .options(PrintOptions::LINE_NUMBER | PrintOptions::FUNCTION_NAME);
/// ```
#[macro_export]
macro_rules! log_message {
    ($severity:expr, $($arg:tt)*) => {
        $crate::debug::LogMessage::new($severity, format!($($arg)*)).at($crate::call_site!())
    };
}

/// Log an INFO message through `printer`
///
/// # Example
///
/// ```no_run
/// let printer = game_debug::debug::DebugPrinter::new();
/// game_debug::debug_info!(printer, "Spawned {} enemies", 12);
/// ```
#[macro_export]
macro_rules! debug_info {
    ($printer:expr, $($arg:tt)*) => {
        $printer.log($crate::log_message!($crate::debug::log::LogSeverity::Info, $($arg)*))
    };
}

/// Log a WARNING message through `printer`
#[macro_export]
macro_rules! debug_warning {
    ($printer:expr, $($arg:tt)*) => {
        $printer.log($crate::log_message!($crate::debug::log::LogSeverity::Warning, $($arg)*))
    };
}

/// Log an ERROR message through `printer`
#[macro_export]
macro_rules! debug_error {
    ($printer:expr, $($arg:tt)*) => {
        $printer.log($crate::log_message!($crate::debug::log::LogSeverity::Error, $($arg)*))
    };
}
