//! Sprite state shared by every object in the world.
//!
//! Positions are world pixels with y up. `angle` is in degrees,
//! counter-clockwise. Hit boxes are axis-aligned; the player's is a square that
//! does not change size as it turns, so turning in place next to a wall never
//! pushes it into the wall.

use crate::config::SpriteDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Wall,
    Chest,
    Bullet,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn left(&self) -> f32 {
        self.center_x - self.half_w
    }

    pub fn right(&self) -> f32 {
        self.center_x + self.half_w
    }

    pub fn bottom(&self) -> f32 {
        self.center_y - self.half_h
    }

    pub fn top(&self) -> f32 {
        self.center_y + self.half_h
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub center_x: f32,
    pub center_y: f32,
    pub angle: f32,
    pub change_x: f32,
    pub change_y: f32,
    pub change_angle: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(kind: SpriteKind, width: f32, height: f32) -> Self {
        Self {
            kind,
            center_x: 0.0,
            center_y: 0.0,
            angle: 0.0,
            change_x: 0.0,
            change_y: 0.0,
            change_angle: 0.0,
            width,
            height,
        }
    }

    pub fn from_def(kind: SpriteKind, def: &SpriteDef) -> Self {
        Self::new(kind, def.width, def.height)
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.center_x = x;
        self.center_y = y;
        self
    }

    pub fn hit_box(&self) -> Aabb {
        let (half_w, half_h) = match self.kind {
            SpriteKind::Player => {
                let half = self.width.min(self.height) * 0.5;
                (half, half)
            }
            _ => (self.width * 0.5, self.height * 0.5),
        };
        Aabb {
            center_x: self.center_x,
            center_y: self.center_y,
            half_w,
            half_h,
        }
    }

    pub fn left(&self) -> f32 {
        self.hit_box().left()
    }

    pub fn right(&self) -> f32 {
        self.hit_box().right()
    }

    pub fn bottom(&self) -> f32 {
        self.hit_box().bottom()
    }

    pub fn top(&self) -> f32 {
        self.hit_box().top()
    }

    pub fn collides_with(&self, other: &Sprite) -> bool {
        self.hit_box().overlaps(&other.hit_box())
    }
}

/// Indices into `list` of every sprite overlapping `sprite`, in list order.
pub fn collides_with_list(sprite: &Sprite, list: &[Sprite]) -> Vec<usize> {
    let hit_box = sprite.hit_box();
    list.iter()
        .enumerate()
        .filter(|(_, other)| hit_box.overlaps(&other.hit_box()))
        .map(|(i, _)| i)
        .collect()
}
