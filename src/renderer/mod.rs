//! Rendering boundary
//!
//! Translates world state into draw calls on a host-provided `Canvas`.

pub mod canvas;
pub mod scene;

pub use canvas::{Canvas, DrawCommand, FontStyle, RecordingCanvas, Sprite, TextSpec};
pub use scene::render_frame;
