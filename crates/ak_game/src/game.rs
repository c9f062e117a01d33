//! Game rules, independent of windowing, audio and the GPU.
//!
//! `update()` runs one frame:
//!   1. stick axes become the player's velocity (zero inside the dead zone)
//!   2. the player turns and thrusts, bullets fly and leave the world
//!   3. chests under the player are collected
//!   4. the combined movement is applied with wall blocking
//!   5. the view scrolls to keep the player inside the margins
//!
//! Side effects the host must perform (sounds) come back as `FrameEvents`.

use ak_core::input::{Key, StickAxes};

use crate::bullet::{Bullet, BulletList};
use crate::config::{GameConfig, JoyButton};
use crate::physics::{MoveResult, PhysicsEngineSimple};
use crate::player::Player;
use crate::sprite::{collides_with_list, Sprite};
use crate::viewport::Viewport;
use crate::world;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    ChestCollected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub chests_collected: u32,
    pub viewport_changed: bool,
    pub movement: MoveResult,
    pub sound: Option<Sound>,
}

pub struct GameState {
    config: GameConfig,
    pub player: Player,
    physics: PhysicsEngineSimple,
    pub chests: Vec<Sprite>,
    pub bullets: BulletList,
    pub viewport: Viewport,
    pub score: u32,
}

impl GameState {
    /// Fresh game: player centred on the first screen, walls and chests laid out.
    pub fn new(config: GameConfig) -> Self {
        let screen = &config.screen;
        let mut player = Player::new(config.sprites.player.width, config.sprites.player.height);
        player.sprite.center_x = screen.width as f32 / 2.0;
        player.sprite.center_y = screen.height as f32 / 2.0;

        let walls = world::build_walls(&config);
        let chests = world::place_chests(&config, &walls, &player.sprite);
        let viewport = Viewport::new(screen.width, screen.height, config.viewport_margin);

        log::info!(
            "Game set up: {} walls, {} chests",
            walls.len(),
            chests.len()
        );

        Self {
            player,
            physics: PhysicsEngineSimple::new(walls),
            chests,
            bullets: BulletList::default(),
            viewport,
            score: 0,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn walls(&self) -> &[Sprite] {
        self.physics.walls()
    }

    pub fn update(&mut self, stick: StickAxes) -> FrameEvents {
        let speed = self.config.movement_speed;
        let dead_zone = self.config.dead_zone;
        let sprite = &mut self.player.sprite;
        sprite.change_x = if stick.x.abs() < dead_zone {
            0.0
        } else {
            stick.x * speed
        };
        sprite.change_y = if stick.y.abs() < dead_zone {
            0.0
        } else {
            stick.y * speed
        };

        let (thrust_x, thrust_y) = self.player.update();
        self.bullets.update(&self.config.bullet_bounds);

        let hits = collides_with_list(&self.player.sprite, &self.chests);
        // Remove back to front so earlier indices stay valid.
        for &index in hits.iter().rev() {
            self.chests.remove(index);
        }
        let collected = hits.len() as u32;
        self.score += collected;

        let dx = self.player.sprite.change_x + thrust_x;
        let dy = self.player.sprite.change_y + thrust_y;
        let movement = self.physics.update(&mut self.player.sprite, dx, dy);

        let hit_box = self.player.sprite.hit_box();
        let viewport_changed = self.viewport.scroll_to_keep_visible(
            hit_box.left(),
            hit_box.right(),
            hit_box.bottom(),
            hit_box.top(),
        );

        FrameEvents {
            chests_collected: collected,
            viewport_changed,
            movement,
            sound: (collected > 0).then_some(Sound::ChestCollected),
        }
    }

    pub fn on_key_press(&mut self, key: Key) {
        self.player
            .on_key_press(key, self.config.angle_speed, self.config.movement_speed);
    }

    pub fn on_key_release(&mut self, key: Key) {
        self.player.on_key_release(key);
    }

    /// Fire toward the world point under the cursor.
    pub fn on_mouse_press(&mut self, screen_x: f64, screen_y: f64) {
        let target = self.viewport.screen_to_world(screen_x, screen_y);
        let start = (self.player.sprite.center_x, self.player.sprite.center_y);
        let bullet = Bullet::aimed(
            &self.config.sprites.bullet,
            start,
            target,
            self.config.bullet_speed,
        );
        log::debug!("Bullet angle: {:.2}", bullet.sprite.angle);
        self.bullets.push(bullet);
    }

    pub fn on_joybutton_press(&mut self, button: JoyButton) {
        log::debug!("Button {:?} down", button);
        if button == self.config.fire_button {
            let origin = (self.player.sprite.center_x, self.player.sprite.center_y);
            self.bullets.push(Bullet::along_facing(
                &self.config.sprites.bullet,
                origin,
                self.player.sprite.angle,
                self.config.bullet_speed,
            ));
        }
    }

    pub fn on_joybutton_release(&mut self, button: JoyButton) {
        log::debug!("Button {:?} up", button);
    }

    pub fn on_joyhat_motion(&mut self, hat_x: i8, hat_y: i8) {
        log::debug!("Hat ({}, {})", hat_x, hat_y);
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Everything to draw, back to front: walls, player, chests, bullets.
    pub fn draw_order(&self) -> impl Iterator<Item = &Sprite> {
        self.walls()
            .iter()
            .chain(std::iter::once(&self.player.sprite))
            .chain(self.chests.iter())
            .chain(self.bullets.iter().map(|b| &b.sprite))
    }
}
