//! Simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - Time only arrives as a `dt` argument
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s
//! - No rendering or audio dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{entities_collide, within_radius};
pub use entity::{Entity, EntityKind, EntityTag};
pub use input::InputEvent;
pub use state::{GameEvent, Phase, Screen, Snapshot, SoundCue, World};
pub use tick::tick;

impl World {
    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        tick::tick(self, dt);
    }
}
