use ak_core::input::Key;

use crate::sprite::{Sprite, SpriteKind};

/// The knight. Turns with Left/Right, thrusts along its facing with Up/Down.
///
/// Facing is measured from straight up, so at angle 0 thrust moves along +y
/// and at 90 degrees along -x.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    pub speed: f32,
}

impl Player {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            sprite: Sprite::new(SpriteKind::Player, width, height),
            speed: 0.0,
        }
    }

    /// Apply this frame's turn and return the thrust displacement.
    ///
    /// The thrust uses the facing from before the turn.
    pub fn update(&mut self) -> (f32, f32) {
        let angle_rad = self.sprite.angle.to_radians();

        self.sprite.angle += self.sprite.change_angle;

        (
            -self.speed * angle_rad.sin(),
            self.speed * angle_rad.cos(),
        )
    }

    pub fn on_key_press(&mut self, key: Key, angle_speed: f32, movement_speed: f32) {
        match key {
            Key::Left => self.sprite.change_angle = angle_speed,
            Key::Right => self.sprite.change_angle = -angle_speed,
            Key::Up => self.speed = movement_speed,
            Key::Down => self.speed = -movement_speed,
            _ => {}
        }
    }

    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Up | Key::Down => self.speed = 0.0,
            Key::Left | Key::Right => self.sprite.change_angle = 0.0,
            _ => {}
        }
    }
}
