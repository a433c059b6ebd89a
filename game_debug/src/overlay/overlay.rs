/// Overlay trait and the message type it receives.

use colored::*;
use super::Color;

/// Key deciding whether a message adds a new line or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKey {
    /// Always add a new entry
    #[default]
    New,

    /// Replace the live entry carrying the same key
    Replace(u64),
}

/// A transient on-screen message
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMessage {
    pub key: MessageKey,
    /// Display duration in seconds
    pub duration: f32,
    pub color: Color,
    pub text: String,
}

/// On-screen message sink
///
/// Implemented by the host engine's debug overlay. The overlay owns expiry;
/// callers never touch a message again after `add_message`.
pub trait Overlay: Send + Sync {
    fn add_message(&self, message: ScreenMessage);
}

/// Overlay that prints messages to the console in their color
///
/// Useful for headless runs and tools where there is no screen to draw on.
pub struct ConsoleOverlay;

impl Overlay for ConsoleOverlay {
    fn add_message(&self, message: ScreenMessage) {
        let Color { r, g, b, .. } = message.color;
        println!(
            "[SCREEN {:.1}s] {}",
            message.duration,
            message.text.truecolor(r, g, b)
        );
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
