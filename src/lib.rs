//! Drift Arena - a top-down arena shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (camera follow, movement, collisions, game state)
//! - `render`: Screen-space scene emission behind a `DrawSurface` trait
//! - `config`: Data-driven game tuning
//!
//! The simulation is frame-driven: the host's scheduler invokes one
//! `tick` per frame and motion is expressed in units-per-tick, so
//! there is no delta-time compensation. Everything random flows from
//! a single seeded RNG, making whole runs reproducible.

pub mod config;
pub mod render;
pub mod sim;

pub use config::Config;
pub use render::DrawSurface;

/// Game configuration constants
pub mod consts {
    /// Viewport size assumed when the host doesn't report one
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Camera deadzone rectangle (centered in the viewport)
    pub const DEADZONE_WIDTH: f32 = 400.0;
    pub const DEADZONE_HEIGHT: f32 = 300.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Screen-space margin beyond the viewport before a bullet is culled
    pub const BULLET_CULL_MARGIN: f32 = 50.0;
    /// Aim vectors shorter than this are dropped instead of normalized
    pub const AIM_EPSILON: f32 = 1e-4;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Spawn ring radius around the player (world units)
    pub const ENEMY_SPAWN_DISTANCE: f32 = 500.0;
    /// Bernoulli spawn odds per tick
    pub const ENEMY_SPAWN_CHANCE: f32 = 0.02;
    /// Live-enemy cap; spawning is a no-op once reached
    pub const MAX_ENEMIES: usize = 512;

    /// Score awarded per destroyed enemy
    pub const KILL_SCORE: u64 = 10;
}

/// Solid RGBA color for draw commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const PLAYER: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BULLET: Color = Color::rgb(0xFF, 0xFF, 0x00);
    pub const ENEMY: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GRID: Color = Color::rgba(0xFF, 0xFF, 0xFF, 51);
    pub const DEADZONE: Color = Color::rgba(0x00, 0xFF, 0x00, 128);
    pub const AIM_LINE: Color = Color::rgba(0xFF, 0xFF, 0x00, 128);
}
