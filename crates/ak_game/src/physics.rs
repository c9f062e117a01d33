//! Wall blocking for the player.
//!
//! Axis-separable move-and-slide against a list of wall sprites: resolve X
//! first, then resolve Y from the corrected X. Pushing diagonally into a wall
//! keeps the parallel component, so the player slides along it.
//!
//! Each axis is swept, so a fast move cannot skip over a thin wall. Walls the
//! player already overlaps at the start of a move are ignored; they never push
//! it out.

use crate::sprite::{Aabb, Sprite};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub blocked_left: bool,
    pub blocked_right: bool,
    pub blocked_down: bool,
    pub blocked_up: bool,
}

impl MoveResult {
    pub fn blocked(&self) -> bool {
        self.blocked_left || self.blocked_right || self.blocked_down || self.blocked_up
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhysicsEngineSimple {
    walls: Vec<Sprite>,
}

impl PhysicsEngineSimple {
    pub fn new(walls: Vec<Sprite>) -> Self {
        Self { walls }
    }

    pub fn walls(&self) -> &[Sprite] {
        &self.walls
    }

    /// Move `sprite` by `(dx, dy)`, stopping flush against walls.
    pub fn update(&self, sprite: &mut Sprite, dx: f32, dy: f32) -> MoveResult {
        const EPS: f32 = 0.0001;

        let start = sprite.hit_box();

        let resolved_x = self.resolve_axis_x(start, dx);
        let collided_x = (resolved_x - (start.center_x + dx)).abs() > EPS;

        let mut moved = start;
        moved.center_x = resolved_x;
        let resolved_y = self.resolve_axis_y(moved, dy);
        let collided_y = (resolved_y - (start.center_y + dy)).abs() > EPS;

        sprite.center_x = resolved_x;
        sprite.center_y = resolved_y;

        MoveResult {
            blocked_left: collided_x && dx < 0.0,
            blocked_right: collided_x && dx > 0.0,
            blocked_down: collided_y && dy < 0.0,
            blocked_up: collided_y && dy > 0.0,
        }
    }

    fn resolve_axis_x(&self, aabb: Aabb, dx: f32) -> f32 {
        if dx == 0.0 {
            return aabb.center_x;
        }

        let mut candidate_x = aabb.center_x + dx;
        let swept = Aabb {
            center_x: aabb.center_x + dx * 0.5,
            half_w: aabb.half_w + dx.abs() * 0.5,
            ..aabb
        };

        for wall in self.walls.iter().map(Sprite::hit_box) {
            if !swept.overlaps(&wall) || aabb.overlaps(&wall) {
                continue;
            }
            if dx > 0.0 {
                candidate_x = candidate_x.min(wall.left() - aabb.half_w);
            } else {
                candidate_x = candidate_x.max(wall.right() + aabb.half_w);
            }
        }

        // Never push opposite to the direction of travel.
        if dx > 0.0 {
            candidate_x.max(aabb.center_x)
        } else {
            candidate_x.min(aabb.center_x)
        }
    }

    fn resolve_axis_y(&self, aabb: Aabb, dy: f32) -> f32 {
        if dy == 0.0 {
            return aabb.center_y;
        }

        let mut candidate_y = aabb.center_y + dy;
        let swept = Aabb {
            center_y: aabb.center_y + dy * 0.5,
            half_h: aabb.half_h + dy.abs() * 0.5,
            ..aabb
        };

        for wall in self.walls.iter().map(Sprite::hit_box) {
            if !swept.overlaps(&wall) || aabb.overlaps(&wall) {
                continue;
            }
            if dy > 0.0 {
                candidate_y = candidate_y.min(wall.bottom() - aabb.half_h);
            } else {
                candidate_y = candidate_y.max(wall.top() + aabb.half_h);
            }
        }

        if dy > 0.0 {
            candidate_y.max(aabb.center_y)
        } else {
            candidate_y.min(aabb.center_y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SpriteKind;

    fn wall(x: f32, y: f32) -> Sprite {
        Sprite::new(SpriteKind::Wall, 64.0, 64.0).at(x, y)
    }

    fn player(x: f32, y: f32) -> Sprite {
        Sprite::new(SpriteKind::Player, 40.0, 40.0).at(x, y)
    }

    #[test]
    fn free_move_is_unchanged() {
        let engine = PhysicsEngineSimple::new(vec![wall(500.0, 500.0)]);
        let mut p = player(0.0, 0.0);
        let result = engine.update(&mut p, 3.0, -4.0);
        assert_eq!((p.center_x, p.center_y), (3.0, -4.0));
        assert!(!result.blocked());
    }

    #[test]
    fn stops_flush_against_wall_on_the_right() {
        // Wall spans x 68..132; player half width 20.
        let engine = PhysicsEngineSimple::new(vec![wall(100.0, 0.0)]);
        let mut p = player(45.0, 0.0);
        let result = engine.update(&mut p, 5.0, 0.0);
        assert!((p.center_x - 48.0).abs() < 1e-4);
        assert!(result.blocked_right);
        assert!(!result.blocked_left);
    }

    #[test]
    fn stops_flush_against_wall_below() {
        // Wall spans y -132..-68.
        let engine = PhysicsEngineSimple::new(vec![wall(0.0, -100.0)]);
        let mut p = player(0.0, -46.0);
        let result = engine.update(&mut p, 0.0, -5.0);
        assert!((p.center_y + 48.0).abs() < 1e-4);
        assert!(result.blocked_down);
    }

    #[test]
    fn diagonal_push_slides_along_wall() {
        let engine = PhysicsEngineSimple::new(vec![wall(100.0, 0.0)]);
        let mut p = player(48.0, 0.0);
        let result = engine.update(&mut p, 5.0, 5.0);
        assert!((p.center_x - 48.0).abs() < 1e-4);
        assert!((p.center_y - 5.0).abs() < 1e-4);
        assert!(result.blocked_right);
        assert!(!result.blocked_up);
    }

    #[test]
    fn fast_move_does_not_tunnel_through_wall() {
        let engine = PhysicsEngineSimple::new(vec![wall(100.0, 0.0)]);
        let mut p = player(0.0, 0.0);
        engine.update(&mut p, 400.0, 0.0);
        assert!((p.center_x - 48.0).abs() < 1e-4);
    }

    #[test]
    fn nearest_wall_wins_when_several_block() {
        let engine = PhysicsEngineSimple::new(vec![wall(300.0, 0.0), wall(100.0, 0.0)]);
        let mut p = player(0.0, 0.0);
        engine.update(&mut p, 400.0, 0.0);
        assert!((p.center_x - 48.0).abs() < 1e-4);
    }

    #[test]
    fn overlapping_start_is_not_pushed_backwards() {
        let engine = PhysicsEngineSimple::new(vec![wall(0.0, 0.0)]);
        let mut p = player(30.0, 0.0);
        let result = engine.update(&mut p, 2.0, 0.0);
        assert!((p.center_x - 32.0).abs() < 1e-4);
        assert!(!result.blocked());
    }

    #[test]
    fn moving_away_from_touching_wall_is_free() {
        let engine = PhysicsEngineSimple::new(vec![wall(100.0, 0.0)]);
        let mut p = player(48.0, 0.0);
        let result = engine.update(&mut p, -5.0, 0.0);
        assert!((p.center_x - 43.0).abs() < 1e-4);
        assert!(!result.blocked());
    }
}
