use crate::config::{Bounds, SpriteDef};
use crate::sprite::{Sprite, SpriteKind};

/// A projectile that always points the way it travels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub sprite: Sprite,
}

impl Bullet {
    /// Fired from `start` toward `target` (mouse fire).
    pub fn aimed(def: &SpriteDef, start: (f32, f32), target: (f32, f32), speed: f32) -> Self {
        let mut sprite = Sprite::from_def(SpriteKind::Bullet, def).at(start.0, start.1);
        let angle = (target.1 - start.1).atan2(target.0 - start.0);
        sprite.angle = angle.to_degrees();
        sprite.change_x = angle.cos() * speed;
        sprite.change_y = angle.sin() * speed;
        Self { sprite }
    }

    /// Fired along a facing measured from straight up (gamepad fire).
    ///
    /// The bullet has already advanced one step when returned, so it leaves
    /// the shooter's centre on the frame it is fired.
    pub fn along_facing(def: &SpriteDef, origin: (f32, f32), facing_deg: f32, speed: f32) -> Self {
        let mut sprite = Sprite::from_def(SpriteKind::Bullet, def).at(origin.0, origin.1);
        let radians = facing_deg.to_radians();
        sprite.change_y = radians.cos() * speed;
        sprite.change_x = -radians.sin() * speed;
        let mut bullet = Self { sprite };
        bullet.update();
        bullet
    }

    pub fn update(&mut self) {
        let sprite = &mut self.sprite;
        sprite.center_x += sprite.change_x;
        sprite.center_y += sprite.change_y;
        sprite.angle = sprite.change_y.atan2(sprite.change_x).to_degrees();
    }
}

#[derive(Debug, Clone, Default)]
pub struct BulletList {
    bullets: Vec<Bullet>,
}

impl BulletList {
    pub fn push(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Advance every bullet and drop the ones that left `bounds`.
    /// Returns how many were dropped.
    pub fn update(&mut self, bounds: &Bounds) -> usize {
        for bullet in &mut self.bullets {
            bullet.update();
        }
        let before = self.bullets.len();
        self.bullets
            .retain(|b| bounds.contains(b.sprite.center_x, b.sprite.center_y));
        before - self.bullets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn laser() -> SpriteDef {
        GameConfig::default().sprites.bullet
    }

    #[test]
    fn aimed_bullet_heads_for_target() {
        let bullet = Bullet::aimed(&laser(), (0.0, 0.0), (30.0, 40.0), 10.0);
        assert!((bullet.sprite.change_x - 6.0).abs() < 1e-4);
        assert!((bullet.sprite.change_y - 8.0).abs() < 1e-4);
        assert!((bullet.sprite.angle - 53.130_1).abs() < 1e-3);
        assert_eq!((bullet.sprite.center_x, bullet.sprite.center_y), (0.0, 0.0));
    }

    #[test]
    fn aimed_straight_left_points_backwards() {
        let bullet = Bullet::aimed(&laser(), (10.0, 10.0), (-90.0, 10.0), 10.0);
        assert!((bullet.sprite.angle.abs() - 180.0).abs() < 1e-4);
        assert!((bullet.sprite.change_x + 10.0).abs() < 1e-4);
    }

    #[test]
    fn facing_bullet_is_advanced_once() {
        let bullet = Bullet::along_facing(&laser(), (100.0, 100.0), 0.0, 10.0);
        assert!((bullet.sprite.center_x - 100.0).abs() < 1e-4);
        assert!((bullet.sprite.center_y - 110.0).abs() < 1e-4);
        assert!((bullet.sprite.angle - 90.0).abs() < 1e-4);
    }

    #[test]
    fn facing_bullet_follows_turned_player() {
        let bullet = Bullet::along_facing(&laser(), (0.0, 0.0), 90.0, 10.0);
        assert!((bullet.sprite.change_x + 10.0).abs() < 1e-4);
        assert!(bullet.sprite.change_y.abs() < 1e-4);
    }

    #[test]
    fn list_update_culls_bullets_outside_bounds() {
        let bounds = Bounds {
            left: -100.0,
            right: 100.0,
            bottom: -100.0,
            top: 100.0,
        };
        let mut list = BulletList::default();
        list.push(Bullet::aimed(&laser(), (95.0, 0.0), (200.0, 0.0), 10.0));
        list.push(Bullet::aimed(&laser(), (0.0, 0.0), (0.0, 50.0), 10.0));

        assert_eq!(list.update(&bounds), 1);
        assert_eq!(list.len(), 1);
        let survivor = list.iter().next().expect("one bullet left");
        assert!((survivor.sprite.center_y - 10.0).abs() < 1e-4);
    }
}
