//! Host input mapped onto world mutators
//!
//! Hosts translate raw events into `InputEvent`s; any key restarts from the
//! END screen, the fire key shoots during play.

use serde::{Deserialize, Serialize};

use super::state::{Phase, World};

/// Input from the host, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved to world coordinates
    PointerMoved { x: f32, y: f32 },
    /// A key went down; `fire` is true for the fire key (space)
    KeyPressed { fire: bool },
    /// A key was released
    KeyReleased,
    /// The host surface changed size
    Resized { width: f32, height: f32 },
}

impl World {
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.set_hero_position(x, y),
            InputEvent::KeyPressed { fire } => {
                if self.phase() == Phase::End && !self.settle_guard() {
                    self.request_restart();
                } else if fire {
                    self.request_fire();
                }
            }
            InputEvent::KeyReleased => self.notify_input_released(),
            InputEvent::Resized { width, height } => self.resize_world(width, height),
        }
    }
}
