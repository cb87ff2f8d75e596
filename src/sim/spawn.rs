//! Entity spawning
//!
//! Spawners read the current world size and draw from the world's seeded
//! RNG, so the same seed always produces the same field.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use super::entity::EntityKind;
use super::state::{GameEvent, SoundCue, World};
use crate::consts::STAR_COLORS;

impl World {
    /// Scatter `n` stars over the visible area
    pub fn spawn_stars(&mut self, n: usize) {
        let max_radius = self.tuning.star_max_radius;
        let min_brightness = self.tuning.star_min_brightness;
        self.entities.reserve(n);

        for _ in 0..n {
            let pos = Vec2::new(
                self.rng.random::<f32>() * self.width,
                self.rng.random::<f32>() * self.height,
            );
            let radius = self.rng.random::<f32>() * max_radius;
            let brightness = min_brightness + self.rng.random::<f32>() * (1.0 - min_brightness);
            let color = STAR_COLORS[self.rng.random_range(0..STAR_COLORS.len())];

            self.push_entity(
                pos,
                EntityKind::Star {
                    radius,
                    brightness,
                    color: color.to_string(),
                },
            );
        }
    }

    /// Spawn the player's ship and make it the session's hero
    pub fn spawn_hero(&mut self) -> u32 {
        let pos = Vec2::new(
            self.width / 2.0,
            self.height - self.tuning.hero_bottom_offset,
        );
        let id = self.push_entity(
            pos,
            EntityKind::Hero {
                angle: 0.0,
                roll: 0.0,
                size: self.tuning.hero_size,
            },
        );
        self.hero_id = Some(id);
        id
    }

    /// Spawn one rock somewhere above the top edge
    pub fn spawn_rock(&mut self) -> u32 {
        let pos = Vec2::new(
            self.rng.random::<f32>() * self.width,
            self.rng.random::<f32>() * -self.height,
        );
        let angle = self.rng.random::<f32>() * TAU;
        let roll = self.rng.random::<f32>() * TAU - PI;
        let (min_speed, max_speed) = (self.tuning.rock_min_speed, self.tuning.rock_max_speed);
        let speed = min_speed + self.rng.random::<f32>() * (max_speed - min_speed);

        self.push_entity(
            pos,
            EntityKind::Rock {
                angle,
                roll,
                speed,
                size: self.tuning.rock_size,
            },
        )
    }

    pub fn spawn_all_rocks(&mut self, n: usize) {
        for _ in 0..n {
            self.spawn_rock();
        }
    }

    /// Fire a laser from the hero. Returns false if the shot was rejected
    /// (not playing, no hero, or still cooling down).
    pub fn spawn_laser(&mut self) -> bool {
        if !self.is_playing() || self.fire_cooldown > 0.0 {
            return false;
        }
        let Some(hero_pos) = self.hero().map(|h| h.pos) else {
            return false;
        };

        self.fire_cooldown = self.tuning.fire_cooldown;

        let pos = hero_pos - Vec2::new(0.0, self.tuning.laser_offset);
        let id = self.push_entity(
            pos,
            EntityKind::Laser {
                speed: self.tuning.laser_speed,
                size: self.tuning.laser_size,
            },
        );
        log::debug!("Laser {} fired at ({:.0}, {:.0})", id, pos.x, pos.y);
        self.emit(GameEvent::Sound {
            cue: SoundCue::Laser,
            volume: 1.0,
        });
        true
    }

    /// Spawn an explosion over an entity centered at `center` with `size`.
    /// The explosion sits at the entity's top-left corner and inherits its size.
    pub fn spawn_explosion(
        &mut self,
        center: Vec2,
        size: f32,
        speed_scale: f32,
        volume_scale: f32,
    ) -> u32 {
        let pos = center - Vec2::splat(size / 2.0);
        let id = self.push_entity(
            pos,
            EntityKind::Explosion {
                timer: self.tuning.explosion_start_timer,
                speed_scale,
                size,
            },
        );
        self.emit(GameEvent::Sound {
            cue: SoundCue::Explosion,
            volume: volume_scale,
        });
        id
    }

    /// Spawn floating text at `pos` with a pre-seeded timer
    pub fn spawn_text_popup(&mut self, text: &str, initial_timer: f32, pos: Vec2) -> u32 {
        self.push_entity(
            pos,
            EntityKind::TextPopup {
                text: text.to_string(),
                timer: initial_timer,
            },
        )
    }
}
