//! Data-driven game balance
//!
//! Every gameplay constant lives here so a build can be rebalanced from a
//! JSON file without touching the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds (scaled by the explosion's speed) before an explosion fades out
    pub explosion_lifetime: f32,
    /// Starting timer for new explosions, skips the full-opacity first frame
    pub explosion_start_timer: f32,
    /// Seconds a score popup stays on screen
    pub text_lifetime: f32,
    /// Center-to-center distance below which two entities touch
    pub collision_radius: f32,
    /// Seconds between laser shots
    pub fire_cooldown: f32,

    pub star_count: usize,
    pub initial_rock_count: usize,

    pub score_per_second: f32,
    pub score_per_kill: f32,
    /// Score needed per difficulty level (each level adds one rock)
    pub difficulty_step: f32,

    pub hero_size: f32,
    /// Distance of the spawned hero above the bottom edge
    pub hero_bottom_offset: f32,

    pub rock_size: f32,
    pub rock_min_speed: f32,
    pub rock_max_speed: f32,

    pub laser_speed: f32,
    pub laser_size: f32,
    /// Laser spawn point above the hero center
    pub laser_offset: f32,

    /// Explosion speed scale for a laser kill
    pub kill_explosion_speed: f32,
    /// Explosion volume for a laser kill
    pub kill_explosion_volume: f32,

    pub star_max_radius: f32,
    pub star_min_brightness: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            explosion_lifetime: 2.0,
            explosion_start_timer: 0.1,
            text_lifetime: 1.0,
            collision_radius: 50.0,
            fire_cooldown: 0.25,

            star_count: 500,
            initial_rock_count: 10,

            score_per_second: 10.0,
            score_per_kill: 10.0,
            difficulty_step: 100.0,

            hero_size: 90.0,
            hero_bottom_offset: 100.0,

            rock_size: 90.0,
            rock_min_speed: 100.0,
            rock_max_speed: 250.0,

            laser_speed: 500.0,
            laser_size: 80.0,
            laser_offset: 60.0,

            kill_explosion_speed: 5.0,
            kill_explosion_volume: 0.5,

            star_max_radius: 1.1,
            star_min_brightness: 0.8,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("explosion_lifetime", self.explosion_lifetime),
            ("text_lifetime", self.text_lifetime),
            ("collision_radius", self.collision_radius),
            ("difficulty_step", self.difficulty_step),
            ("rock_min_speed", self.rock_min_speed),
            ("laser_speed", self.laser_speed),
            ("kill_explosion_speed", self.kill_explosion_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        if !(self.rock_max_speed > self.rock_min_speed) {
            return Err(TuningError::Invalid {
                field: "rock_max_speed",
                reason: format!(
                    "must exceed rock_min_speed ({} <= {})",
                    self.rock_max_speed, self.rock_min_speed
                ),
            });
        }

        if !(0.0..=1.0).contains(&self.star_min_brightness) {
            return Err(TuningError::Invalid {
                field: "star_min_brightness",
                reason: format!("must be within 0..=1, got {}", self.star_min_brightness),
            });
        }

        if !(0.0..=1.0).contains(&self.kill_explosion_volume) || self.kill_explosion_volume == 0.0
        {
            return Err(TuningError::Invalid {
                field: "kill_explosion_volume",
                reason: format!("must be within (0, 1], got {}", self.kill_explosion_volume),
            });
        }

        if !(self.fire_cooldown.is_finite() && self.fire_cooldown >= 0.0) {
            return Err(TuningError::Invalid {
                field: "fire_cooldown",
                reason: format!("must be non-negative, got {}", self.fire_cooldown),
            });
        }

        Ok(())
    }
}
