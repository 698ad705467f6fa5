//! Screen-space scene emission
//!
//! The core owns every coordinate computation; the host owns the
//! pixels. A renderer implements [`DrawSurface`] and receives the full
//! draw list for a frame from [`draw_scene`]: world-aligned grid,
//! deadzone outline, aim line, entities, score, and a position
//! readout. All coordinates handed to the surface are screen-space.

use glam::Vec2;

use crate::Color;
use crate::sim::GameState;

/// Spacing of the world-aligned background grid, world units
pub const GRID_SIZE: f32 = 40.0;

/// Primitive draw commands accepted by the host's drawing surface
pub trait DrawSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn rect_outline(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn text(&mut self, text: &str, pos: Vec2);
}

/// Emit one frame's draw list. Call after `tick`; `pointer` is the
/// same viewport-space pointer position the tick consumed.
pub fn draw_scene(state: &GameState, pointer: Vec2, surface: &mut impl DrawSurface) {
    draw_grid(state, surface);
    draw_deadzone(state, surface);
    draw_aim_line(state, pointer, surface);

    let player = &state.player;
    surface.fill_circle(player.display_pos, player.radius, Color::PLAYER);
    for bullet in &state.bullets {
        surface.fill_circle(
            state.camera.to_screen(bullet.world_pos),
            bullet.radius,
            bullet.color,
        );
    }
    for enemy in &state.enemies {
        surface.fill_circle(
            state.camera.to_screen(enemy.world_pos),
            enemy.radius,
            enemy.color,
        );
    }

    surface.text(&format!("Score: {}", state.score), Vec2::new(20.0, 30.0));
}

/// Background grid aligned to world coordinates, so it scrolls with
/// the camera. Lines sit on world multiples of [`GRID_SIZE`].
fn draw_grid(state: &GameState, surface: &mut impl DrawSurface) {
    let camera = &state.camera;
    let viewport = camera.viewport;
    let start = (camera.to_world(Vec2::ZERO) / GRID_SIZE).floor() * GRID_SIZE;

    let mut x = start.x;
    loop {
        let screen_x = camera.to_screen(Vec2::new(x, 0.0)).x;
        if screen_x > viewport.x + GRID_SIZE {
            break;
        }
        surface.line(
            Vec2::new(screen_x, 0.0),
            Vec2::new(screen_x, viewport.y),
            Color::GRID,
        );
        x += GRID_SIZE;
    }

    let mut y = start.y;
    loop {
        let screen_y = camera.to_screen(Vec2::new(0.0, y)).y;
        if screen_y > viewport.y + GRID_SIZE {
            break;
        }
        surface.line(
            Vec2::new(0.0, screen_y),
            Vec2::new(viewport.x, screen_y),
            Color::GRID,
        );
        y += GRID_SIZE;
    }
}

fn draw_deadzone(state: &GameState, surface: &mut impl DrawSurface) {
    let (min, _) = state.camera.deadzone_bounds();
    surface.rect_outline(min, state.camera.deadzone, Color::DEADZONE);
}

/// Aim line from the player's drawn position to the pointer, plus the
/// world/screen position readout under the score.
fn draw_aim_line(state: &GameState, pointer: Vec2, surface: &mut impl DrawSurface) {
    let player = &state.player;
    surface.line(player.display_pos, pointer, Color::AIM_LINE);
    surface.text(
        &format!(
            "World: ({:.1}, {:.1})",
            player.world_pos.x, player.world_pos.y
        ),
        Vec2::new(20.0, 60.0),
    );
    surface.text(
        &format!(
            "Screen: ({:.1}, {:.1})",
            player.display_pos.x, player.display_pos.y
        ),
        Vec2::new(20.0, 90.0),
    );
}
