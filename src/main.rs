//! Asteroid Evader entry point
//!
//! The native build has no window: it plays one headless session with a
//! simple autopilot, logging sound cues and session events, then prints a
//! JSON summary. Pass a tuning JSON path as the first argument to rebalance.

use std::time::{SystemTime, UNIX_EPOCH};

use asteroid_evader::audio::{AudioManager, LogBackend};
use asteroid_evader::renderer::{RecordingCanvas, Sprite};
use asteroid_evader::sim::{EntityTag, GameEvent, InputEvent, World};
use asteroid_evader::{Game, Settings, Tuning};

/// Simulated display refresh rate
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Give up after this many simulated seconds
const MAX_SECONDS: f64 = 120.0;

fn main() {
    env_logger::init();
    log::info!("Asteroid Evader (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let world = World::new(tuning, seed);
    let audio = AudioManager::new(Box::<LogBackend>::default(), Settings::default());
    let mut game = Game::new(world, audio);
    let mut canvas = RecordingCanvas::new();

    // any key leaves the intro
    game.handle_input(InputEvent::KeyPressed { fire: false });
    game.handle_input(InputEvent::KeyReleased);

    let mut time = 0.0;
    let mut final_score = None;
    while time < MAX_SECONDS * 1000.0 {
        autopilot(&mut game);

        canvas.reset();
        let events = game.frame(time, &mut canvas);
        time += FRAME_MS;

        if let Some(score) = events.iter().find_map(|e| match e {
            GameEvent::SessionEnded { score } => Some(*score),
            _ => None,
        }) {
            final_score = Some(score);
            break;
        }
    }

    let world = game.world();
    let summary = serde_json::json!({
        "seed": world.seed(),
        "seconds": time / 1000.0,
        "phase": world.phase(),
        "score": final_score.unwrap_or(world.score()).floor(),
        "difficulty": world.difficulty(),
        "rocks": world.count(EntityTag::Rock),
        "explosions": world.count(EntityTag::Explosion),
        "rocks_drawn_last_frame": canvas.sprites(Sprite::Rock).count(),
        "faults": game.faults(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}

/// Dodge the closest rock heading for the ship and shoot whatever is above
fn autopilot(game: &mut Game) {
    let world = game.world();
    let Some(hero) = world.hero() else {
        return;
    };
    let (width, _) = world.dimensions();
    let hero_pos = hero.pos;

    let threat = world
        .entities()
        .iter()
        .filter(|e| e.is_rock() && e.pos.y < hero_pos.y && (e.pos.x - hero_pos.x).abs() < 120.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let mut target_x = hero_pos.x;
    let mut fire = false;
    if let Some(rock) = threat {
        fire = true;
        if hero_pos.y - rock.pos.y < 250.0 {
            let step = if rock.pos.x > hero_pos.x { -8.0 } else { 8.0 };
            target_x = (hero_pos.x + step).clamp(0.0, width);
        }
    }

    game.handle_input(InputEvent::PointerMoved {
        x: target_x,
        y: hero_pos.y,
    });
    if fire {
        game.handle_input(InputEvent::KeyPressed { fire: true });
        game.handle_input(InputEvent::KeyReleased);
    }
}
