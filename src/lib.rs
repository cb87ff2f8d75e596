//! Asteroid Evader - a single-screen dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, update step, collisions, session)
//! - `renderer`: Pull-based draw dispatch through the `Canvas` trait
//! - `audio`: Sound cue dispatch through the `SoundBackend` trait
//! - `platform`: Frame clock and host abstraction
//! - `tuning`: Data-driven game balance
//! - `game`: Frame driver tying the above together

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Default world dimensions (until the host reports a real size)
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 720.0;

    /// Background clear color
    pub const BACKGROUND_COLOR: &str = "#000020";
    /// Star palette (white, warm, cool)
    pub const STAR_COLORS: [&str; 3] = ["#ffffff", "#ffe9c4", "#d4fbff"];
    /// Accent color for titles and score popups
    pub const ACCENT_COLOR: &str = "#00ffff";
    pub const TEXT_COLOR: &str = "#ffffff";

    /// Text shown by a laser kill
    pub const KILL_POPUP_TEXT: &str = "+10";

    /// Explosion sprites are drawn at twice their entity size
    pub const EXPLOSION_DRAW_FACTOR: f32 = 2.0;

    /// Theme song volume
    pub const THEME_VOLUME: f32 = 0.75;
}

/// Replace NaN, infinite or negative time steps with zero
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
