//! Bullet-enemy collision resolution
//!
//! Overlap is tested in world space on circle radii. Both collections
//! are scanned by index in reverse so removals never skip or repeat a
//! pair mid-scan.

use crate::consts::KILL_SCORE;

use super::state::GameState;

/// Remove every colliding bullet-enemy pair and award score.
///
/// A bullet matches at most one enemy per pass: the inner scan breaks
/// on the first hit, so one bullet can never destroy two overlapping
/// enemies in the same tick.
pub fn resolve_collisions(state: &mut GameState) {
    for bi in (0..state.bullets.len()).rev() {
        for ei in (0..state.enemies.len()).rev() {
            let dist = state.bullets[bi]
                .world_pos
                .distance(state.enemies[ei].world_pos);
            if dist < state.bullets[bi].radius + state.enemies[ei].radius {
                state.bullets.remove(bi);
                state.enemies.remove(ei);
                state.score += KILL_SCORE;
                log::debug!("enemy down, score {}", state.score);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use crate::config::Config;
    use crate::sim::state::{Bullet, Enemy};
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(3, Config::default())
    }

    fn bullet_at(pos: Vec2) -> Bullet {
        Bullet {
            world_pos: pos,
            vel: Vec2::ZERO,
            radius: 5.0,
            color: Color::BULLET,
        }
    }

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy {
            world_pos: pos,
            radius: 20.0,
            color: Color::ENEMY,
            speed: 2.0,
        }
    }

    #[test]
    fn overlapping_pair_is_removed_and_scored() {
        let mut state = state();
        state.bullets.push(bullet_at(Vec2::new(100.0, 100.0)));
        state.enemies.push(enemy_at(Vec2::new(110.0, 100.0)));

        resolve_collisions(&mut state);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn touching_at_exact_radius_sum_is_a_miss() {
        let mut state = state();
        state.bullets.push(bullet_at(Vec2::ZERO));
        state.enemies.push(enemy_at(Vec2::new(25.0, 0.0)));

        resolve_collisions(&mut state);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn one_bullet_kills_at_most_one_enemy() {
        let mut state = state();
        state.bullets.push(bullet_at(Vec2::ZERO));
        // Both enemies overlap the bullet
        state.enemies.push(enemy_at(Vec2::new(10.0, 0.0)));
        state.enemies.push(enemy_at(Vec2::new(-10.0, 0.0)));

        resolve_collisions(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn multiple_pairs_resolve_in_one_pass() {
        let mut state = state();
        state.bullets.push(bullet_at(Vec2::new(0.0, 0.0)));
        state.bullets.push(bullet_at(Vec2::new(500.0, 0.0)));
        state.enemies.push(enemy_at(Vec2::new(5.0, 0.0)));
        state.enemies.push(enemy_at(Vec2::new(505.0, 0.0)));

        resolve_collisions(&mut state);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 20);
    }

    #[test]
    fn distant_entities_are_untouched() {
        let mut state = state();
        state.bullets.push(bullet_at(Vec2::ZERO));
        state.enemies.push(enemy_at(Vec2::new(1000.0, 1000.0)));

        resolve_collisions(&mut state);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.enemies.len(), 1);
    }
}
