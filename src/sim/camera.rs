//! Deadzone-follow camera and the world/screen transform
//!
//! World space is an unbounded Cartesian plane; screen space is the
//! fixed viewport. The transform is a pure translation: a fixed
//! viewport-center bias (so the world origin starts at screen center)
//! plus a single mutable follow offset. The camera never re-centers:
//! it only shifts when the player's proposed screen position would
//! cross a deadzone edge, and then by exactly the overshoot, pinning
//! the player to that edge.

use glam::Vec2;

/// Outcome of one follow step
#[derive(Debug, Clone, Copy)]
pub struct Follow {
    /// Accepted world position: the proposal, or the unchanged
    /// starting position when the movement gate rejects it
    pub world_pos: Vec2,
    /// Whether the offset shifted on at least one axis this step
    pub camera_moved: bool,
}

/// The sole translator between world and screen space
#[derive(Debug, Clone)]
pub struct Camera {
    /// Mutable part of the world-to-screen translation; starts at zero
    pub offset: Vec2,
    /// Viewport size, queried once at startup and assumed stable
    pub viewport: Vec2,
    /// Deadzone rectangle size, always centered in the viewport
    pub deadzone: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, deadzone: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
            deadzone,
        }
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world + self.viewport / 2.0 + self.offset
    }

    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.viewport / 2.0 - self.offset
    }

    /// Deadzone bounds as (min, max) screen-space corners
    pub fn deadzone_bounds(&self) -> (Vec2, Vec2) {
        let min = (self.viewport - self.deadzone) / 2.0;
        (min, min + self.deadzone)
    }

    /// Apply one tick of proposed player movement to the camera.
    ///
    /// Axes are independent: if the proposed screen position crosses a
    /// deadzone edge on an axis, the offset shifts by the signed
    /// overshoot so the player lands on that edge (edge clamping, not
    /// re-centering). The proposal is then accepted only if the camera
    /// moved on some axis or the recomputed screen position lies inside
    /// the deadzone on both axes; otherwise the entire displacement is
    /// discarded for this tick. The discard (rather than a clamp to the
    /// boundary) is deliberate policy, not an error.
    pub fn follow(&mut self, world_pos: Vec2, delta: Vec2) -> Follow {
        let proposed = world_pos + delta;
        let screen = self.to_screen(proposed);
        let (min, max) = self.deadzone_bounds();

        let mut camera_moved = false;
        if screen.x < min.x {
            self.offset.x += min.x - screen.x;
            camera_moved = true;
        } else if screen.x > max.x {
            self.offset.x += max.x - screen.x;
            camera_moved = true;
        }
        if screen.y < min.y {
            self.offset.y += min.y - screen.y;
            camera_moved = true;
        } else if screen.y > max.y {
            self.offset.y += max.y - screen.y;
            camera_moved = true;
        }

        // Recompute with the possibly-updated offset
        let screen = self.to_screen(proposed);
        let inside = screen.x >= min.x
            && screen.x <= max.x
            && screen.y >= min.y
            && screen.y <= max.y;

        let world_pos = if camera_moved || inside {
            proposed
        } else {
            world_pos
        };
        Follow {
            world_pos,
            camera_moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn camera() -> Camera {
        Camera::new(Vec2::new(800.0, 600.0), Vec2::new(400.0, 300.0))
    }

    #[test]
    fn world_origin_starts_at_screen_center() {
        let cam = camera();
        assert_eq!(cam.to_screen(Vec2::ZERO), Vec2::new(400.0, 300.0));
        assert_eq!(cam.to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn transform_tracks_the_follow_offset() {
        let mut cam = camera();
        cam.offset = Vec2::new(-120.0, 35.0);
        assert_eq!(cam.to_screen(Vec2::new(500.0, 100.0)), Vec2::new(780.0, 435.0));
        assert_eq!(cam.to_world(Vec2::new(780.0, 435.0)), Vec2::new(500.0, 100.0));
    }

    #[test]
    fn deadzone_stays_centered_across_viewports() {
        let cam = camera();
        let (min, max) = cam.deadzone_bounds();
        assert_eq!(min, Vec2::new(200.0, 150.0));
        assert_eq!(max, Vec2::new(600.0, 450.0));

        let wide = Camera::new(Vec2::new(1920.0, 1080.0), Vec2::new(400.0, 300.0));
        let (min, max) = wide.deadzone_bounds();
        assert_eq!((min + max) / 2.0, wide.viewport / 2.0);
    }

    #[test]
    fn movement_inside_deadzone_leaves_camera_alone() {
        let mut cam = camera();
        let f = cam.follow(Vec2::ZERO, Vec2::new(5.0, -5.0));
        assert!(!f.camera_moved);
        assert_eq!(f.world_pos, Vec2::new(5.0, -5.0));
        assert_eq!(cam.offset, Vec2::ZERO);
    }

    #[test]
    fn edge_crossing_shifts_offset_by_overshoot() {
        let mut cam = camera();
        // Screen x would land at 605, five units past the right edge (600)
        let f = cam.follow(Vec2::new(195.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(f.camera_moved);
        assert_eq!(cam.offset, Vec2::new(-5.0, 0.0));
        assert_eq!(f.world_pos, Vec2::new(205.0, 0.0));
        // Player is pinned to the deadzone edge on screen
        assert_eq!(cam.to_screen(f.world_pos), Vec2::new(600.0, 300.0));
    }

    #[test]
    fn axes_clamp_independently() {
        let mut cam = camera();
        // Crosses the top edge only; x stays put
        let f = cam.follow(Vec2::new(0.0, -145.0), Vec2::new(0.0, -10.0));
        assert!(f.camera_moved);
        assert_eq!(cam.offset, Vec2::new(0.0, 5.0));
        assert_eq!(cam.to_screen(f.world_pos), Vec2::new(400.0, 150.0));
    }

    proptest! {
        // Integer-valued coordinates keep f32 addition exact, so the
        // round trip must be equality, not approximation.
        #[test]
        fn round_trip_is_exact(
            wx in -10_000i32..10_000,
            wy in -10_000i32..10_000,
            ox in -10_000i32..10_000,
            oy in -10_000i32..10_000,
        ) {
            let mut cam = camera();
            cam.offset = Vec2::new(ox as f32, oy as f32);
            let world = Vec2::new(wx as f32, wy as f32);
            prop_assert_eq!(cam.to_world(cam.to_screen(world)), world);
        }

        #[test]
        fn follow_keeps_player_in_deadzone_or_moves_camera(
            wx in -2_000i32..2_000,
            wy in -2_000i32..2_000,
            ox in -2_000i32..2_000,
            oy in -2_000i32..2_000,
            dx in -50i32..50,
            dy in -50i32..50,
        ) {
            let mut cam = camera();
            cam.offset = Vec2::new(ox as f32, oy as f32);
            let f = cam.follow(
                Vec2::new(wx as f32, wy as f32),
                Vec2::new(dx as f32, dy as f32),
            );
            let screen = cam.to_screen(f.world_pos);
            let (min, max) = cam.deadzone_bounds();
            let inside = screen.x >= min.x
                && screen.x <= max.x
                && screen.y >= min.y
                && screen.y <= max.y;
            prop_assert!(f.camera_moved || inside);
        }
    }
}
