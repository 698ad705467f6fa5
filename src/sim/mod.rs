//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per scheduled frame, motion in units-per-tick
//! - Seeded RNG only
//! - Removal-safe entity iteration
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod state;
pub mod tick;

pub use camera::{Camera, Follow};
pub use collision::resolve_collisions;
pub use state::{Bullet, Enemy, GameState, Player};
pub use tick::{TickInput, tick};
