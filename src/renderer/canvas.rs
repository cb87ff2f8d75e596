//! Drawing surface abstraction

use glam::Vec2;

/// Which image a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ship,
    Rock,
    Laser,
    Explosion,
}

/// Font style for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Centered text draw request
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec<'a> {
    pub text: &'a str,
    pub pos: Vec2,
    pub color: &'a str,
    pub size_px: f32,
    pub style: FontStyle,
    pub alpha: f32,
}

/// A backend that can paint the scene
///
/// Sprites are drawn translated to `pos`, rotated by `angle`, with the
/// image's top-left at `-half_size` and extent `draw_size`.
pub trait Canvas {
    fn clear(&mut self, color: &str);
    fn draw_star(&mut self, pos: Vec2, radius: f32, color: &str, alpha: f32);
    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        pos: Vec2,
        angle: f32,
        half_size: f32,
        draw_size: f32,
        alpha: f32,
    );
    fn draw_text(&mut self, spec: &TextSpec<'_>);
}

/// Owned record of one draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: String,
    },
    Star {
        pos: Vec2,
        radius: f32,
        color: String,
        alpha: f32,
    },
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        angle: f32,
        half_size: f32,
        draw_size: f32,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        color: String,
        size_px: f32,
        style: FontStyle,
        alpha: f32,
    },
}

/// Canvas that records draw calls instead of painting
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn sprites(&self, which: Sprite) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Sprite { sprite, .. } if *sprite == which))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn star_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Star { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: &str) {
        self.commands.push(DrawCommand::Clear {
            color: color.to_string(),
        });
    }

    fn draw_star(&mut self, pos: Vec2, radius: f32, color: &str, alpha: f32) {
        self.commands.push(DrawCommand::Star {
            pos,
            radius,
            color: color.to_string(),
            alpha,
        });
    }

    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        pos: Vec2,
        angle: f32,
        half_size: f32,
        draw_size: f32,
        alpha: f32,
    ) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            pos,
            angle,
            half_size,
            draw_size,
            alpha,
        });
    }

    fn draw_text(&mut self, spec: &TextSpec<'_>) {
        self.commands.push(DrawCommand::Text {
            text: spec.text.to_string(),
            pos: spec.pos,
            color: spec.color.to_string(),
            size_px: spec.size_px,
            style: spec.style,
            alpha: spec.alpha,
        });
    }
}
