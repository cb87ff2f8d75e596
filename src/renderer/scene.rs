//! Scene composition: decides what to draw each frame
//!
//! Rendering is pull-based. The host calls `render_frame` after the tick and
//! the whole store is painted in store order.

use glam::Vec2;

use super::canvas::{Canvas, FontStyle, Sprite, TextSpec};
use crate::consts::{ACCENT_COLOR, BACKGROUND_COLOR, EXPLOSION_DRAW_FACTOR, TEXT_COLOR};
use crate::sim::{Entity, EntityKind, Screen, World};

pub const TITLE: &str = "Asteroid Evader";

/// Paint the current world state
pub fn render_frame(world: &World, canvas: &mut dyn Canvas) {
    canvas.clear(BACKGROUND_COLOR);

    for entity in world.entities() {
        draw_entity(world, entity, canvas);
    }

    if world.score() > 0.0 {
        let (width, _) = world.dimensions();
        let score = format!("Score {}", world.display_score());
        canvas.draw_text(&TextSpec {
            text: &score,
            pos: Vec2::new(width / 2.0, 50.0),
            color: TEXT_COLOR,
            size_px: 30.0,
            style: FontStyle::Italic,
            alpha: 1.0,
        });
    }

    match world.screen() {
        Screen::Intro => draw_intro(world, canvas),
        Screen::GameOver => draw_game_over(world, canvas),
        Screen::Playing => {}
    }
}

fn draw_entity(world: &World, entity: &Entity, canvas: &mut dyn Canvas) {
    let sprite = match &entity.kind {
        EntityKind::Star {
            radius,
            brightness,
            color,
        } => {
            canvas.draw_star(entity.pos, *radius, color, *brightness);
            return;
        }
        EntityKind::TextPopup { text, timer } => {
            let alpha = (1.0 - timer / world.tuning.text_lifetime).clamp(0.0, 1.0);
            canvas.draw_text(&TextSpec {
                text,
                pos: entity.pos,
                color: ACCENT_COLOR,
                size_px: 20.0,
                style: FontStyle::Normal,
                alpha,
            });
            return;
        }
        EntityKind::Hero { .. } => Sprite::Ship,
        EntityKind::Rock { .. } => Sprite::Rock,
        EntityKind::Laser { .. } => Sprite::Laser,
        EntityKind::Explosion { .. } => Sprite::Explosion,
    };

    let size = entity.size().unwrap_or(0.0);
    let (factor, alpha) = match entity.explosion_alpha(world.tuning.explosion_lifetime) {
        Some(alpha) => (EXPLOSION_DRAW_FACTOR, alpha),
        None => (1.0, 1.0),
    };

    canvas.draw_sprite(
        sprite,
        entity.pos,
        entity.angle(),
        size / 2.0,
        size * factor,
        alpha,
    );
}

fn centered(canvas: &mut dyn Canvas, text: &str, pos: Vec2, color: &str, size: f32, style: FontStyle) {
    canvas.draw_text(&TextSpec {
        text,
        pos,
        color,
        size_px: size,
        style,
        alpha: 1.0,
    });
}

fn draw_intro(world: &World, canvas: &mut dyn Canvas) {
    let (w, h) = world.dimensions();
    let cx = w / 2.0;

    centered(canvas, TITLE, Vec2::new(cx, h / 4.0), ACCENT_COLOR, 130.0, FontStyle::Normal);
    centered(
        canvas,
        "Use mouse to navigate ship through asteroid field",
        Vec2::new(cx, h / 2.0),
        TEXT_COLOR,
        20.0,
        FontStyle::Normal,
    );
    centered(
        canvas,
        "Press spacebar to shoot lasers ",
        Vec2::new(cx, h / 2.0 + 25.0),
        TEXT_COLOR,
        20.0,
        FontStyle::Normal,
    );
    centered(
        canvas,
        "(press any key to play)",
        Vec2::new(cx, h / 2.0 + 75.0),
        TEXT_COLOR,
        20.0,
        FontStyle::Italic,
    );
}

fn draw_game_over(world: &World, canvas: &mut dyn Canvas) {
    let (w, h) = world.dimensions();
    let cx = w / 2.0;

    centered(canvas, "Game Over", Vec2::new(cx, h / 2.0), ACCENT_COLOR, 130.0, FontStyle::Italic);
    centered(
        canvas,
        "(press any key to play again)",
        Vec2::new(cx, h / 2.0 + 50.0),
        TEXT_COLOR,
        20.0,
        FontStyle::Italic,
    );
}
