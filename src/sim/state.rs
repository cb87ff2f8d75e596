//! World state and core simulation types
//!
//! `World` owns everything the simulation mutates: the entity store, the
//! session fields and the RNG. There is no global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, EntityTag};
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::tuning::Tuning;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Play,
    /// Intro or game over (see `Screen`)
    End,
}

/// What the player should be looking at, derived from phase and score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Never played yet
    Intro,
    Playing,
    GameOver,
}

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Laser,
    Explosion,
    /// Looping background music
    Theme,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Laser => "laser",
            SoundCue::Explosion => "explosion",
            SoundCue::Theme => "theme",
        }
    }
}

/// Side effects produced by the simulation, drained by the host each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Play a sound cue at the given volume (0, 1]
    Sound { cue: SoundCue, volume: f32 },
    SessionStarted,
    SessionEnded { score: f32 },
    DifficultyIncreased { level: u32 },
}

/// Serializable view of the world for debugging and tooling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: f32,
    pub difficulty: u32,
    pub width: f32,
    pub height: f32,
    pub entities: Vec<Entity>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Gameplay constants
    pub tuning: Tuning,
    /// Entity store (unordered; removal only happens inside `tick`)
    pub entities: Vec<Entity>,
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) phase: Phase,
    pub(crate) score: f32,
    pub(crate) difficulty: u32,
    /// Set when a session ends, cleared once the held key is released
    pub(crate) settle_guard: bool,
    /// Seconds until the next shot is allowed
    pub(crate) fire_cooldown: f32,
    pub(crate) hero_id: Option<u32>,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl World {
    /// Create a world at the default size showing the intro starfield
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_dimensions(tuning, seed, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_dimensions(tuning: Tuning, seed: u64, width: f32, height: f32) -> Self {
        let mut world = Self {
            tuning,
            entities: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            phase: Phase::End,
            score: 0.0,
            difficulty: 0,
            settle_guard: false,
            fire_cooldown: 0.0,
            hero_id: None,
            events: Vec::new(),
            next_id: 1,
        };
        world.resize_world(width, height);

        let stars = world.tuning.star_count;
        world.spawn_stars(stars);

        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an entity to the store, returning its id
    pub fn push_entity(&mut self, pos: Vec2, kind: EntityKind) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity::new(id, pos, kind));
        id
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Play
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// (width, height)
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn fire_cooldown(&self) -> f32 {
        self.fire_cooldown
    }

    /// True while a restart request would be ignored
    pub fn settle_guard(&self) -> bool {
        self.settle_guard
    }

    pub fn screen(&self) -> Screen {
        match self.phase {
            Phase::Play => Screen::Playing,
            Phase::End if self.score == 0.0 => Screen::Intro,
            Phase::End => Screen::GameOver,
        }
    }

    pub fn hero(&self) -> Option<&Entity> {
        let id = self.hero_id?;
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn hero_mut(&mut self) -> Option<&mut Entity> {
        let id = self.hero_id?;
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub(crate) fn hero_index(&self) -> Option<usize> {
        let id = self.hero_id?;
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn count(&self, tag: EntityTag) -> usize {
        self.entities.iter().filter(|e| e.tag() == tag).count()
    }

    /// Take all pending side effects
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            difficulty: self.difficulty,
            width: self.width,
            height: self.height,
            entities: self.entities.clone(),
        }
    }
}
