//! Variable timestep simulation tick
//!
//! Core game loop: score and difficulty first, then one reverse pass over
//! the entity store that moves, ages and collides everything.

use super::collision::entities_collide;
use super::entity::EntityKind;
use super::state::{GameEvent, World};
use crate::consts::KILL_POPUP_TEXT;
use crate::sanitize_dt;

/// Marks for entities that die during a pass. Spawns append to the store,
/// so an index may be past the initial length.
#[derive(Debug, Default)]
struct Doomed(Vec<bool>);

impl Doomed {
    fn with_len(len: usize) -> Self {
        Self(vec![false; len])
    }

    fn mark(&mut self, idx: usize) {
        if idx >= self.0.len() {
            self.0.resize(idx + 1, false);
        }
        self.0[idx] = true;
    }

    fn contains(&self, idx: usize) -> bool {
        self.0.get(idx).copied().unwrap_or(false)
    }

    fn any(&self) -> bool {
        self.0.iter().any(|&d| d)
    }
}

/// Cooldown remainders at or below this count as expired (f32 drift)
const COOLDOWN_EPSILON: f32 = 1e-6;

/// Advance the world by `dt` seconds. NaN or negative `dt` counts as zero.
pub fn tick(world: &mut World, dt: f32) {
    let dt = sanitize_dt(dt);

    world.fire_cooldown -= dt;
    if world.fire_cooldown <= COOLDOWN_EPSILON {
        world.fire_cooldown = 0.0;
    }

    if world.is_playing() {
        update_score(world, dt);
    }

    update_entities(world, dt);
}

/// Clock-driven score and the difficulty curve
fn update_score(world: &mut World, dt: f32) {
    world.score += world.tuning.score_per_second * dt;

    let level = (world.score / world.tuning.difficulty_step).floor() as u32;
    if level > world.difficulty {
        world.difficulty += 1;
        world.spawn_rock();
        log::info!(
            "Difficulty {} reached at score {}",
            world.difficulty,
            world.display_score()
        );
        world.emit(GameEvent::DifficultyIncreased {
            level: world.difficulty,
        });
    }
}

/// Single reverse pass: motion, timers, off-screen checks, collisions
fn update_entities(world: &mut World, dt: f32) {
    let height = world.height;
    let explosion_lifetime = world.tuning.explosion_lifetime;
    let text_lifetime = world.tuning.text_lifetime;
    let radius = world.tuning.collision_radius;

    let mut doomed = Doomed::with_len(world.entities.len());
    let mut i = world.entities.len();

    while i > 0 {
        i -= 1;
        if doomed.contains(i) {
            continue;
        }

        let entity = &mut world.entities[i];
        entity.roll(dt);

        match &mut entity.kind {
            EntityKind::Laser { speed, size } => {
                entity.pos.y -= *speed * dt;
                if entity.pos.y + *size < 0.0 {
                    doomed.mark(i);
                    continue;
                }

                if world.is_playing() {
                    laser_hits_rock(world, &mut doomed, i, radius, dt);
                }
            }

            EntityKind::Explosion {
                timer, speed_scale, ..
            } => {
                *timer += dt * *speed_scale;
                if *timer > explosion_lifetime {
                    doomed.mark(i);
                }
            }

            EntityKind::TextPopup { timer, .. } => {
                *timer += dt;
                if *timer > text_lifetime {
                    doomed.mark(i);
                }
            }

            EntityKind::Rock { speed, size, .. } => {
                entity.pos.y += *speed * dt;
                if entity.pos.y - *size > height {
                    doomed.mark(i);
                    world.spawn_rock();
                    continue;
                }

                if world.is_playing() {
                    if let Some(hero_idx) = world.hero_index() {
                        let hero = &world.entities[hero_idx];
                        if entities_collide(&world.entities[i], hero, radius) {
                            hero_destroyed(world, &mut doomed, hero_idx);
                        }
                    }
                }
            }

            EntityKind::Star { .. } | EntityKind::Hero { .. } => {}
        }
    }

    if doomed.any() {
        let mut idx = 0;
        world.entities.retain(|_| {
            let keep = !doomed.contains(idx);
            idx += 1;
            keep
        });
    }
}

/// Check one laser against every live rock; at most one kill per laser
fn laser_hits_rock(
    world: &mut World,
    doomed: &mut Doomed,
    laser_idx: usize,
    radius: f32,
    dt: f32,
) {
    let mut j = world.entities.len();
    while j > 0 {
        j -= 1;
        if doomed.contains(j) {
            continue;
        }
        let rock = &world.entities[j];
        let EntityKind::Rock { size, .. } = rock.kind else {
            continue;
        };
        if !entities_collide(&world.entities[laser_idx], rock, radius) {
            continue;
        }

        let rock_pos = rock.pos;
        doomed.mark(j);
        doomed.mark(laser_idx);

        world.score += world.tuning.score_per_kill;
        let (speed, volume) = (
            world.tuning.kill_explosion_speed,
            world.tuning.kill_explosion_volume,
        );
        world.spawn_explosion(rock_pos, size, speed, volume);
        world.spawn_text_popup(KILL_POPUP_TEXT, dt, rock_pos);
        world.spawn_rock();
        log::debug!("Rock destroyed at ({:.0}, {:.0})", rock_pos.x, rock_pos.y);
        break;
    }
}

/// Rock reached the hero: the ship explodes and leaves the store, the rock
/// stays, the session ends
fn hero_destroyed(world: &mut World, doomed: &mut Doomed, hero_idx: usize) {
    let hero = &world.entities[hero_idx];
    let (pos, size) = (hero.pos, hero.size().unwrap_or(0.0));
    world.spawn_explosion(pos, size, 1.0, 1.0);
    doomed.mark(hero_idx);
    world.finish_session();
}
