/// In-memory overlay that keeps messages alive for their duration.
///
/// The game loop calls `update(dt)` once per frame and draws `messages()`.

use std::sync::Mutex;
use super::{Overlay, ScreenMessage, MessageKey};

struct ActiveMessage {
    message: ScreenMessage,
    remaining: f32,
}

/// Overlay storing messages in memory until they expire
pub struct ScreenMessageQueue {
    entries: Mutex<Vec<ActiveMessage>>,
}

impl ScreenMessageQueue {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Age every message by `dt` seconds and drop the expired ones.
    ///
    /// A message with a non-positive duration stays visible until the next update.
    pub fn update(&self, dt: f32) {
        if let Ok(mut entries) = self.entries.lock() {
            for entry in entries.iter_mut() {
                entry.remaining -= dt;
            }
            entries.retain(|entry| entry.remaining > 0.0);
        }
    }

    /// Snapshot of live messages, oldest first
    pub fn messages(&self) -> Vec<ScreenMessage> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().map(|entry| entry.message.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of live messages
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all messages
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for ScreenMessageQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay for ScreenMessageQueue {
    fn add_message(&self, message: ScreenMessage) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };

        let remaining = message.duration;

        if let MessageKey::Replace(key) = message.key {
            if let Some(existing) = entries
                .iter_mut()
                .find(|entry| entry.message.key == MessageKey::Replace(key))
            {
                existing.message = message;
                existing.remaining = remaining;
                return;
            }
        }

        entries.push(ActiveMessage { message, remaining });
    }
}

#[cfg(test)]
#[path = "message_queue_tests.rs"]
mod tests;
