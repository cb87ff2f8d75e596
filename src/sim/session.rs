//! Session state machine and input-facing mutators
//!
//! END → PLAY on a restart request once the settle guard is clear.
//! PLAY → END only when a rock reaches the hero.

use glam::Vec2;

use super::state::{GameEvent, Phase, World};

impl World {
    /// Reset the session and repopulate the field
    pub fn start_session(&mut self) {
        self.phase = Phase::Play;
        self.score = 0.0;
        self.difficulty = 0;
        self.fire_cooldown = 0.0;
        self.settle_guard = false;

        self.entities.clear();
        self.hero_id = None;

        self.spawn_hero();
        let stars = self.tuning.star_count;
        self.spawn_stars(stars);
        let rocks = self.tuning.initial_rock_count;
        self.spawn_all_rocks(rocks);

        log::info!(
            "Session started ({}x{}, {} rocks)",
            self.width,
            self.height,
            rocks
        );
        self.emit(GameEvent::SessionStarted);
    }

    /// PLAY → END and drop the hero from the store.
    pub(crate) fn end_session(&mut self) {
        if let Some(id) = self.finish_session() {
            self.entities.retain(|e| e.id != id);
        }
    }

    /// PLAY → END without touching the store. Arms the settle guard so the
    /// key that is probably still held does not restart straight away.
    /// Returns the id of the hero the caller must remove.
    pub(crate) fn finish_session(&mut self) -> Option<u32> {
        if self.phase != Phase::Play {
            return None;
        }
        self.phase = Phase::End;
        self.settle_guard = true;
        log::info!(
            "Session ended with score {} (difficulty {})",
            self.display_score(),
            self.difficulty
        );
        self.emit(GameEvent::SessionEnded { score: self.score });
        self.hero_id.take()
    }

    /// Start a new session if allowed. Returns true if a session started.
    pub fn request_restart(&mut self) -> bool {
        if self.phase != Phase::End || self.settle_guard {
            return false;
        }
        self.start_session();
        true
    }

    /// The restart key was released; later restart requests are honored
    pub fn notify_input_released(&mut self) {
        if self.phase == Phase::End && self.settle_guard {
            self.settle_guard = false;
        }
    }

    /// Fire a laser, subject to phase and cooldown. Returns true if fired.
    pub fn request_fire(&mut self) -> bool {
        self.spawn_laser()
    }

    /// Move the hero (pointer tracking). Ignored unless playing.
    pub fn set_hero_position(&mut self, x: f32, y: f32) {
        if self.phase != Phase::Play {
            return;
        }
        if !(x.is_finite() && y.is_finite()) {
            log::warn!("Ignoring non-finite hero position ({x}, {y})");
            return;
        }
        if let Some(hero) = self.hero_mut() {
            hero.pos = Vec2::new(x, y);
        }
    }

    /// Update world bounds. Existing entities stay where they are.
    pub fn resize_world(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::warn!("Ignoring invalid world size {width}x{height}");
            return;
        }
        self.width = width;
        self.height = height;
    }
}
