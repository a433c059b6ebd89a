//! Game Debug demo
//!
//! Simulates a few frames of a game loop and sends debug output through the
//! `log` bridge (printed by env_logger) and an in-memory overlay.
//!
//! Run with: RUST_LOG=info cargo run -p game_debug_demo

use std::sync::Arc;
use game_debug::debug::{
    Component, DebugConfig, DebugPrinter, LogMessage, Named, PrintOptions, ScreenText, Subject,
};
use game_debug::debug::log::{LogCrateLogger, LogSeverity};
use game_debug::debug::overlay::{Color, ConsoleOverlay, Overlay, ScreenMessageQueue};

struct Actor {
    name: String,
}

impl Named for Actor {
    fn name(&self) -> &str {
        &self.name
    }
}

struct HealthComponent<'a> {
    owner: &'a Actor,
    health: i32,
}

impl Named for HealthComponent<'_> {
    fn name(&self) -> &str {
        "HealthComponent"
    }
}

impl Component for HealthComponent<'_> {
    fn owner(&self) -> Option<&dyn Named> {
        Some(self.owner as &dyn Named)
    }
}

const FRAME_TIME: f32 = 0.5;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DebugConfig::default().with_default_options(PrintOptions::TIME);
    let overlay = Arc::new(ScreenMessageQueue::new());
    let printer = DebugPrinter::new()
        .with_config(config)
        .with_logger(LogCrateLogger)
        .with_overlay(overlay.clone());

    let player = Actor { name: "Player_0".to_string() };
    let mut health = HealthComponent { owner: &player, health: 100 };

    game_debug::debug_info!(printer, "demo started, frame time {}s", FRAME_TIME);
    printer.screen(ScreenText::new("Wave 1").color(Color::YELLOW).duration(2.0));

    for frame in 0..8 {
        health.health -= 15;

        if health.health < 50 {
            printer.log(
                LogMessage::new(LogSeverity::Warning, format!("health at {}", health.health))
                    .subject(Subject::component(&health)),
            );
        }
        if frame == 4 {
            printer.screen(
                ScreenText::new("low health")
                    .subject(Subject::object(&player))
                    .color(Color::RED)
                    .duration(1.0),
            );
        }

        printer.bench(format!("frame {} simulated", frame));

        overlay.update(FRAME_TIME);
        for message in overlay.messages() {
            ConsoleOverlay.add_message(message);
        }
    }

    printer.log(
        game_debug::log_message!(LogSeverity::Error, "player died")
            .subject(Subject::Object(None))
            .options(PrintOptions::LINE_NUMBER | PrintOptions::FUNCTION_NAME | PrintOptions::DATE),
    );

    printer.clear_overlay();
    printer.screen_green("not shown: overlay detached");
}
