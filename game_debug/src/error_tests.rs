//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use super::*;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_severity_display() {
    let err = Error::InvalidSeverity("fatal".to_string());
    assert_eq!(format!("{}", err), "Invalid severity: fatal");
}

#[test]
fn test_invalid_print_option_display() {
    let err = Error::InvalidPrintOption("column".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid print option"));
    assert!(display.contains("column"));
}

#[test]
fn test_invalid_color_display() {
    let err = Error::InvalidColor("#12".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid color"));
    assert!(display.contains("#12"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidColor("blue-ish".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidSeverity("x".to_string()));
    assert!(debug.contains("InvalidSeverity"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidPrintOption("seconds".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidPrintOption("minutes".to_string()));
}

#[test]
fn test_result_alias_propagates_with_question_mark() {
    fn parse(flag: bool) -> Result<u32> {
        if flag {
            Ok(1)
        } else {
            Err(Error::InvalidSeverity("none".to_string()))
        }
    }

    fn wrapper(flag: bool) -> Result<u32> {
        let value = parse(flag)?;
        Ok(value + 1)
    }

    assert_eq!(wrapper(true), Ok(2));
    assert!(wrapper(false).is_err());
}
