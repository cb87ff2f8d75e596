//! Frame driver
//!
//! Owns the world plus the host-facing pieces (clock, audio) and runs one
//! animation frame at a time: tick, dispatch sounds, render.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::audio::AudioManager;
use crate::platform::FrameClock;
use crate::renderer::{Canvas, render_frame};
use crate::sim::{GameEvent, InputEvent, World};

/// Game instance holding all state
pub struct Game {
    world: World,
    clock: FrameClock,
    audio: AudioManager,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
    /// Frames whose update faulted and was skipped
    faults: u32,
}

impl Game {
    pub fn new(world: World, audio: AudioManager) -> Self {
        Self {
            world,
            clock: FrameClock::new(),
            audio,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
            faults: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Apply host input between frames
    pub fn handle_input(&mut self, event: InputEvent) {
        self.world.handle_input(event);
    }

    /// Run one animation frame at host time `timestamp_ms`.
    /// Returns the non-sound events produced during the frame.
    pub fn frame(&mut self, timestamp_ms: f64, canvas: &mut dyn Canvas) -> Vec<GameEvent> {
        self.audio.start_theme();

        let dt = self.clock.advance(timestamp_ms);
        self.step(dt);

        let events = self.world.drain_events();
        self.audio.dispatch(&events);

        render_frame(&self.world, canvas);
        self.track_fps(timestamp_ms);

        events
            .into_iter()
            .filter(|e| !matches!(e, GameEvent::Sound { .. }))
            .collect()
    }

    /// Tick the world, isolating any fault to this frame.
    /// Returns false if the update was skipped.
    pub fn step(&mut self, dt: f32) -> bool {
        let world = &mut self.world;
        if isolate_frame(|| world.tick(dt)) {
            true
        } else {
            self.faults += 1;
            false
        }
    }

    fn track_fps(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % 60;

        // oldest to newest
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = (59_000.0 / elapsed).round() as u32;
            }
        }
    }
}

/// Run `f`, logging and swallowing a panic instead of unwinding further
fn isolate_frame<F: FnOnce()>(f: F) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => true,
        Err(payload) => {
            log::error!("Frame update failed, skipping frame: {}", panic_message(&*payload));
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogBackend;
    use crate::renderer::RecordingCanvas;
    use crate::settings::Settings;
    use crate::sim::Phase;
    use crate::tuning::Tuning;

    fn game() -> Game {
        let tuning = Tuning {
            star_count: 10,
            initial_rock_count: 0,
            ..Default::default()
        };
        let world = World::with_dimensions(tuning, 8, 800.0, 600.0);
        let audio = AudioManager::new(Box::<LogBackend>::default(), Settings::default());
        Game::new(world, audio)
    }

    #[test]
    fn test_first_frame_does_not_advance() {
        let mut game = game();
        let mut canvas = RecordingCanvas::new();
        game.handle_input(InputEvent::KeyPressed { fire: false });
        game.frame(5000.0, &mut canvas);
        assert_eq!(game.world().score(), 0.0);

        canvas.reset();
        game.frame(6000.0, &mut canvas);
        assert!((game.world().score() - 10.0).abs() < 1e-4);
        assert!(!canvas.commands.is_empty());
    }

    #[test]
    fn test_frame_reports_session_events() {
        let mut game = game();
        let mut canvas = RecordingCanvas::new();
        game.handle_input(InputEvent::KeyPressed { fire: true });
        game.handle_input(InputEvent::KeyPressed { fire: true });
        let events = game.frame(0.0, &mut canvas);
        assert_eq!(events, vec![GameEvent::SessionStarted]);
        assert_eq!(game.world().phase(), Phase::Play);
    }

    #[test]
    fn test_fault_is_isolated() {
        assert!(isolate_frame(|| {}));
        assert!(!isolate_frame(|| panic!("boom")));
    }

    #[test]
    fn test_fps() {
        let mut game = game();
        let mut canvas = RecordingCanvas::new();
        for i in 1..=120 {
            game.frame(i as f64 * 1000.0 / 60.0, &mut canvas);
            canvas.reset();
        }
        assert_eq!(game.fps(), 60);
        assert_eq!(game.faults(), 0);
    }
}
