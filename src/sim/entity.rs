//! Entity model
//!
//! Every simulated object is an `Entity` with a position and a closed
//! `EntityKind`. Update and render match on the kind exhaustively.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kind-specific entity data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Background star (never moves)
    Star {
        radius: f32,
        brightness: f32,
        color: String,
    },
    /// The player's ship
    Hero { angle: f32, roll: f32, size: f32 },
    /// Falling rock
    Rock {
        angle: f32,
        roll: f32,
        speed: f32,
        size: f32,
    },
    /// Laser bolt travelling up
    Laser { speed: f32, size: f32 },
    /// Fading explosion sprite
    Explosion {
        timer: f32,
        speed_scale: f32,
        size: f32,
    },
    /// Floating score text
    TextPopup { text: String, timer: f32 },
}

/// Discriminant-only view of `EntityKind`, handy for counting and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    Star,
    Hero,
    Rock,
    Laser,
    Explosion,
    TextPopup,
}

/// A simulated object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: u32, pos: Vec2, kind: EntityKind) -> Self {
        Self { id, pos, kind }
    }

    pub fn tag(&self) -> EntityTag {
        match self.kind {
            EntityKind::Star { .. } => EntityTag::Star,
            EntityKind::Hero { .. } => EntityTag::Hero,
            EntityKind::Rock { .. } => EntityTag::Rock,
            EntityKind::Laser { .. } => EntityTag::Laser,
            EntityKind::Explosion { .. } => EntityTag::Explosion,
            EntityKind::TextPopup { .. } => EntityTag::TextPopup,
        }
    }

    /// Sprite size, if the entity has one
    pub fn size(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Hero { size, .. }
            | EntityKind::Rock { size, .. }
            | EntityKind::Laser { size, .. }
            | EntityKind::Explosion { size, .. } => Some(size),
            EntityKind::Star { .. } | EntityKind::TextPopup { .. } => None,
        }
    }

    /// Current rotation (0 for kinds that never rotate)
    pub fn angle(&self) -> f32 {
        match self.kind {
            EntityKind::Hero { angle, .. } | EntityKind::Rock { angle, .. } => angle,
            _ => 0.0,
        }
    }

    /// Advance rotation by roll-rate × dt for kinds that roll
    pub fn roll(&mut self, dt: f32) {
        match &mut self.kind {
            EntityKind::Hero { angle, roll, .. } | EntityKind::Rock { angle, roll, .. } => {
                if *roll != 0.0 {
                    *angle += *roll * dt;
                }
            }
            _ => {}
        }
    }

    /// Explosion opacity, derived from its timer
    pub fn explosion_alpha(&self, lifetime: f32) -> Option<f32> {
        match self.kind {
            EntityKind::Explosion { timer, .. } => Some((1.0 - timer / lifetime).clamp(0.0, 1.0)),
            _ => None,
        }
    }

    pub fn is_rock(&self) -> bool {
        matches!(self.kind, EntityKind::Rock { .. })
    }
}
