//! Overlay module: on-screen debug messages.
//!
//! The debug facade hands `ScreenMessage`s to an `Overlay`. Once submitted,
//! the overlay owns the message and decides when it expires.

mod color;
mod overlay;
mod message_queue;

pub use color::Color;
pub use overlay::{Overlay, ScreenMessage, MessageKey, ConsoleOverlay};
pub use message_queue::ScreenMessageQueue;
