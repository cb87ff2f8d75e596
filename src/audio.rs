//! Sound dispatch
//!
//! The simulation only names cues; a `SoundBackend` knows how to play them.
//! `AudioManager` applies the player's volume settings in between.

pub use crate::sim::SoundCue;
use crate::consts::THEME_VOLUME;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Something that can actually make noise
pub trait SoundBackend {
    /// Play a one-shot cue, restarting it if it is already playing
    fn play(&mut self, cue: SoundCue, volume: f32);
    /// Start a looping cue
    fn play_looped(&mut self, cue: SoundCue, volume: f32);
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend {
    pub played: usize,
}

impl SoundBackend for LogBackend {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        self.played += 1;
        log::debug!("sound: {} @ {:.2}", cue.as_str(), volume);
    }

    fn play_looped(&mut self, cue: SoundCue, volume: f32) {
        self.played += 1;
        log::debug!("sound (loop): {} @ {:.2}", cue.as_str(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn SoundBackend>,
    settings: Settings,
    theme_started: bool,
}

impl AudioManager {
    pub fn new(backend: Box<dyn SoundBackend>, settings: Settings) -> Self {
        Self {
            backend,
            settings,
            theme_started: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings.clamped();
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    /// Start the looping theme once
    pub fn start_theme(&mut self) {
        if self.theme_started {
            return;
        }
        let vol = THEME_VOLUME * self.settings.effective_music_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play_looped(SoundCue::Theme, vol);
        self.theme_started = true;
    }

    /// Play a sound effect
    pub fn play(&mut self, cue: SoundCue, volume: f32) {
        let vol = volume.clamp(0.0, 1.0) * self.settings.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(cue, vol);
    }

    /// Play every sound event in `events`, ignoring the rest
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Sound { cue, volume } = *event {
                self.play(cue, volume);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(SoundCue, f32, bool)>>>);

    impl SoundBackend for Recorder {
        fn play(&mut self, cue: SoundCue, volume: f32) {
            self.0.borrow_mut().push((cue, volume, false));
        }

        fn play_looped(&mut self, cue: SoundCue, volume: f32) {
            self.0.borrow_mut().push((cue, volume, true));
        }
    }

    #[test]
    fn test_dispatch_scales_volume() {
        let recorder = Recorder::default();
        let settings = Settings {
            master_volume: 0.5,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Box::new(recorder.clone()), settings);
        audio.dispatch(&[
            GameEvent::Sound {
                cue: SoundCue::Explosion,
                volume: 0.5,
            },
            GameEvent::SessionStarted,
        ]);
        assert_eq!(*recorder.0.borrow(), vec![(SoundCue::Explosion, 0.25, false)]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()), Settings::default());
        audio.set_muted(true);
        audio.play(SoundCue::Laser, 1.0);
        audio.start_theme();
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_theme_starts_once() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()), Settings::default());
        audio.start_theme();
        audio.start_theme();
        assert_eq!(*recorder.0.borrow(), vec![(SoundCue::Theme, 0.75, true)]);
    }
}
