//! End-to-end gameplay scenarios driven through the public API

use asteroid_evader::Tuning;
use asteroid_evader::sim::{EntityKind, EntityTag, GameEvent, Phase, SoundCue, World};
use glam::Vec2;

/// A fresh playing session with only the hero in the field
fn empty_session() -> World {
    let tuning = Tuning {
        star_count: 0,
        initial_rock_count: 0,
        ..Default::default()
    };
    let mut world = World::with_dimensions(tuning, 2024, 1280.0, 720.0);
    assert!(world.request_restart());
    world.drain_events();
    world
}

fn push_rock(world: &mut World, pos: Vec2, speed: f32) -> u32 {
    world.push_entity(
        pos,
        EntityKind::Rock {
            angle: 0.0,
            roll: 0.5,
            speed,
            size: 90.0,
        },
    )
}

#[test]
fn quiet_second_accrues_score_and_moves_rock() {
    let mut world = empty_session();
    let hero_pos = world.hero().unwrap().pos;
    let start = hero_pos - Vec2::new(0.0, 1000.0);
    let id = push_rock(&mut world, start, 150.0);

    for _ in 0..62 {
        world.tick(0.016);
    }
    world.tick(0.008);

    assert_eq!(world.phase(), Phase::Play);
    assert!((world.score() - 10.0).abs() < 1e-3, "score {}", world.score());
    assert_eq!(world.count(EntityTag::Explosion), 0);

    let rock = world.entities().iter().find(|e| e.id == id).unwrap();
    assert!((rock.pos.y - (start.y + 150.0)).abs() < 1e-2);
    assert_eq!(rock.pos.x, start.x);
}

#[test]
fn fire_rate_is_limited() {
    let mut world = empty_session();
    assert!(world.request_fire());
    assert!(!world.request_fire());
    assert_eq!(world.count(EntityTag::Laser), 1);

    world.tick(0.1);
    assert!(!world.request_fire());
    assert_eq!(world.count(EntityTag::Laser), 1);

    world.tick(0.2);
    assert!(world.request_fire());
    assert_eq!(world.count(EntityTag::Laser), 2);

    let lasers = world
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Sound { cue: SoundCue::Laser, .. }))
        .count();
    assert_eq!(lasers, 2);
}

#[test]
fn cooldown_expires_after_exactly_its_duration() {
    let mut world = empty_session();
    assert!(world.request_fire());
    world.tick(0.25);
    assert!(world.request_fire());
}

#[test]
fn cooldown_expires_after_five_short_frames() {
    let mut world = empty_session();
    assert!(world.request_fire());
    for _ in 0..5 {
        world.tick(0.05);
    }
    assert!(world.request_fire());
    assert_eq!(world.count(EntityTag::Laser), 2);
}

#[test]
fn laser_on_rock_scores_a_kill() {
    let mut world = empty_session();
    let pos = Vec2::new(300.0, 300.0);
    let rock_id = push_rock(&mut world, pos, 150.0);
    world.push_entity(
        pos,
        EntityKind::Laser {
            speed: 500.0,
            size: 80.0,
        },
    );

    world.tick(0.016);

    assert!((world.score() - 10.16).abs() < 1e-3);
    assert!(world.entities().iter().all(|e| e.id != rock_id));
    assert_eq!(world.count(EntityTag::Laser), 0);
    assert_eq!(world.count(EntityTag::Explosion), 1);
    assert_eq!(world.count(EntityTag::TextPopup), 1);
    assert_eq!(world.count(EntityTag::Rock), 1);

    let events = world.drain_events();
    assert!(events.contains(&GameEvent::Sound {
        cue: SoundCue::Explosion,
        volume: 0.5
    }));
}

#[test]
fn rock_on_hero_ends_session() {
    let mut world = empty_session();
    let hero_pos = world.hero().unwrap().pos;
    let near = push_rock(&mut world, hero_pos + Vec2::new(49.0, 0.0), 0.0);

    world.tick(0.016);
    assert_eq!(world.phase(), Phase::End);
    assert!(world.entities().iter().any(|e| e.id == near));
    assert_eq!(world.count(EntityTag::Hero), 0);
    assert!(world.hero().is_none());

    let score = world.score();
    for _ in 0..10 {
        world.tick(0.016);
    }
    assert_eq!(world.score(), score);

    let events = world.drain_events();
    assert!(events.contains(&GameEvent::SessionEnded { score }));
    assert!(events.contains(&GameEvent::Sound {
        cue: SoundCue::Explosion,
        volume: 1.0
    }));
}

#[test]
fn rock_just_outside_radius_is_harmless() {
    let mut world = empty_session();
    let hero_pos = world.hero().unwrap().pos;
    push_rock(&mut world, hero_pos + Vec2::new(51.0, 0.0), 0.0);
    world.tick(0.016);
    assert_eq!(world.phase(), Phase::Play);
}

#[test]
fn restart_needs_release() {
    let mut world = empty_session();
    let hero_pos = world.hero().unwrap().pos;
    push_rock(&mut world, hero_pos, 0.0);
    world.tick(0.016);
    assert_eq!(world.phase(), Phase::End);

    let mut starts = 0;
    for _ in 0..10 {
        if world.request_restart() {
            starts += 1;
        }
    }
    assert_eq!(starts, 0);

    world.notify_input_released();
    for _ in 0..10 {
        if world.request_restart() {
            starts += 1;
        }
    }
    assert_eq!(starts, 1);
    assert_eq!(world.phase(), Phase::Play);
    assert_eq!(world.score(), 0.0);
    assert_eq!(world.count(EntityTag::Hero), 1);
}

#[test]
fn difficulty_adds_rocks_over_time() {
    let mut world = empty_session();
    // keep the hero out of the way of anything that spawns
    world.set_hero_position(-10_000.0, -10_000.0);

    let mut elapsed = 0.0;
    while elapsed < 21.0 {
        world.tick(1.0 / 60.0);
        elapsed += 1.0 / 60.0;
    }
    assert_eq!(world.difficulty(), 2);
    assert_eq!(world.count(EntityTag::Rock), 2);
}
