//! Property tests over random frame sequences

use asteroid_evader::Tuning;
use asteroid_evader::sim::{EntityTag, InputEvent, Phase, World};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Tick(f32),
    Fire,
    Move(f32, f32),
    Release,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0.0f32..0.1).prop_map(Step::Tick),
        1 => prop_oneof![Just(f32::NAN), Just(-0.5f32), Just(f32::INFINITY)].prop_map(Step::Tick),
        2 => Just(Step::Fire),
        2 => (0.0f32..800.0, 0.0f32..600.0).prop_map(|(x, y)| Step::Move(x, y)),
        1 => Just(Step::Release),
    ]
}

fn session(seed: u64) -> World {
    let tuning = Tuning {
        star_count: 5,
        ..Default::default()
    };
    let mut world = World::with_dimensions(tuning, seed, 800.0, 600.0);
    world.start_session();
    world
}

fn apply(world: &mut World, step: &Step) {
    match *step {
        Step::Tick(dt) => world.tick(dt),
        Step::Fire => world.handle_input(InputEvent::KeyPressed { fire: true }),
        Step::Move(x, y) => world.handle_input(InputEvent::PointerMoved { x, y }),
        Step::Release => world.handle_input(InputEvent::KeyReleased),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Score never drops while playing and freezes once the session ends
    #[test]
    fn score_is_monotonic(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..300)) {
        let mut world = session(seed);
        for step in &steps {
            let was_playing = world.phase() == Phase::Play;
            let before = world.score();
            apply(&mut world, step);
            if was_playing && world.phase() == Phase::Play {
                prop_assert!(world.score() >= before);
            }
            if !was_playing && world.phase() == Phase::End {
                prop_assert_eq!(world.score(), before);
            }
            prop_assert!(world.score().is_finite());
        }
    }

    /// Every removed rock is replaced in the same tick, and each difficulty
    /// level adds exactly one
    #[test]
    fn rock_population_tracks_difficulty(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..300)) {
        let mut world = session(seed);
        for step in &steps {
            apply(&mut world, step);
            let expected = world.tuning.initial_rock_count + world.difficulty() as usize;
            prop_assert_eq!(world.count(EntityTag::Rock), expected);
        }
    }

    /// The hero exists exactly once during play, never after, and timers
    /// stay in range
    #[test]
    fn store_stays_consistent(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..300)) {
        let mut world = session(seed);
        for step in &steps {
            apply(&mut world, step);
            if world.phase() == Phase::Play {
                prop_assert_eq!(world.count(EntityTag::Hero), 1);
                prop_assert!(world.hero().is_some());
            } else {
                prop_assert_eq!(world.count(EntityTag::Hero), 0);
                prop_assert!(world.hero().is_none());
            }
            for entity in world.entities() {
                prop_assert!(entity.pos.x.is_finite() && entity.pos.y.is_finite());
                if let Some(alpha) = entity.explosion_alpha(world.tuning.explosion_lifetime) {
                    prop_assert!((0.0..=1.0).contains(&alpha));
                }
            }
            prop_assert!(world.fire_cooldown() >= 0.0);
        }
    }

    /// Difficulty is floor(score / 100) once enough ticks have passed
    #[test]
    fn difficulty_follows_score(seed in any::<u64>(), ticks in 1usize..2000) {
        let mut world = session(seed);
        world.set_hero_position(-10_000.0, -10_000.0);
        for _ in 0..ticks {
            world.tick(0.05);
        }
        let level = (world.score() / 100.0).floor() as u32;
        prop_assert_eq!(world.difficulty(), level);
    }
}
