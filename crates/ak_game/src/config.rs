//! Game tuning and world layout, loaded from JSON.
//!
//! Every field is optional in the file. Anything left out takes the stock
//! value, so an empty object `{}` describes the stock game.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    /// Minimum distance in pixels kept between the player and the screen edge.
    pub viewport_margin: f32,
    /// Pixels per frame at full stick deflection or full thrust.
    pub movement_speed: f32,
    /// Degrees per frame while a turn key is held.
    pub angle_speed: f32,
    pub bullet_speed: f32,
    pub dead_zone: f32,
    pub chest_count: u32,
    /// Fixed seed for chest placement; random when absent.
    pub chest_seed: Option<u64>,
    pub background_color: [u8; 3],
    pub sprites: SpriteDefs,
    pub walls: Vec<WallRun>,
    /// Bullets outside this box are dropped. The stock box deliberately
    /// reaches 100 pixels past the walls on every side instead of hugging the
    /// starting screen (-100..1500 x -100..1100), so shots fired from a
    /// scrolled view are not culled while still on screen.
    pub bullet_bounds: Bounds,
    pub fire_button: JoyButton,
    pub chest_sound: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpriteDefs {
    pub player: SpriteDef,
    pub wall: SpriteDef,
    pub chest: SpriteDef,
    pub bullet: SpriteDef,
}

/// Size is the on-screen size in world pixels (image size times scale).
/// `color` is the flat fill drawn when the image is missing.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SpriteDef {
    pub asset: String,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_tint")]
    pub color: [f32; 4],
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Walls along x from `from` (inclusive) to `to` (exclusive) at y = `at`.
    Horizontal,
    /// Walls along y from `from` (inclusive) to `to` (exclusive) at x = `at`.
    Vertical,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WallRun {
    pub axis: Axis,
    pub from: i32,
    pub to: i32,
    pub step: i32,
    pub at: f32,
}

impl WallRun {
    /// Centres of the walls in this run.
    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        (self.from..self.to)
            .step_by(self.step.max(1) as usize)
            .map(move |v| match self.axis {
                Axis::Horizontal => (v as f32, self.at),
                Axis::Vertical => (self.at, v as f32),
            })
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }
}

/// Gamepad buttons the game can bind, named by position on the pad.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoyButton {
    South,
    East,
    West,
    North,
    LeftTrigger,
    RightTrigger,
    LeftTrigger2,
    RightTrigger2,
    Select,
    Start,
    Mode,
    LeftThumb,
    RightThumb,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            viewport_margin: 100.0,
            movement_speed: 5.0,
            angle_speed: 5.0,
            bullet_speed: 10.0,
            dead_zone: 0.05,
            chest_count: 10,
            chest_seed: None,
            background_color: [0, 66, 37],
            sprites: SpriteDefs::default(),
            walls: default_walls(),
            bullet_bounds: Bounds {
                left: -800.0,
                right: 1800.0,
                bottom: -400.0,
                top: 1125.0,
            },
            fire_button: JoyButton::Start,
            chest_sound: "assets/sounds/chest_slam.wav".to_string(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "The Adventurous Knight".to_string(),
        }
    }
}

impl Default for SpriteDefs {
    fn default() -> Self {
        Self {
            player: SpriteDef {
                asset: "assets/textures/survivor-idle_rifle_0.png".to_string(),
                width: 156.5,
                height: 103.5,
                color: [0.85, 0.78, 0.6, 1.0],
            },
            wall: SpriteDef {
                asset: "assets/textures/bush_11.png".to_string(),
                width: 64.0,
                height: 64.0,
                color: [0.12, 0.5, 0.16, 1.0],
            },
            chest: SpriteDef {
                asset: "assets/textures/chest.png".to_string(),
                width: 48.0,
                height: 40.0,
                color: [0.82, 0.6, 0.2, 1.0],
            },
            bullet: SpriteDef {
                asset: "assets/textures/laserBlue05.png".to_string(),
                width: 37.0,
                height: 9.0,
                color: [0.35, 0.65, 1.0, 1.0],
            },
        }
    }
}

fn default_walls() -> Vec<WallRun> {
    vec![
        WallRun {
            axis: Axis::Horizontal,
            from: -700,
            to: 1700,
            step: 100,
            at: -300.0,
        },
        WallRun {
            axis: Axis::Horizontal,
            from: -700,
            to: 1700,
            step: 100,
            at: 1025.0,
        },
        WallRun {
            axis: Axis::Vertical,
            from: -300,
            to: 1025,
            step: 100,
            at: -700.0,
        },
        WallRun {
            axis: Axis::Vertical,
            from: -300,
            to: 1025,
            step: 100,
            at: 1700.0,
        },
    ]
}

const fn default_tint() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

/// Far more than the stock play area can hold without overlaps.
pub const MAX_CHEST_COUNT: u32 = 1000;

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Falls back to the stock game when the file is missing or invalid.
pub fn load_or_default(path: &Path) -> GameConfig {
    if !path.exists() {
        log::warn!(
            "Config '{}' not found, using built-in defaults",
            path.display()
        );
        return GameConfig::default();
    }
    match load_config_from_path(path) {
        Ok(config) => {
            log::info!("Loaded config '{}'", path.display());
            config
        }
        Err(err) => {
            log::error!("{err}. Using built-in defaults.");
            GameConfig::default()
        }
    }
}

fn validate_config(config: &GameConfig) -> Result<(), String> {
    if config.screen.width == 0 || config.screen.height == 0 {
        return Err("Config validation failed: screen width and height must be > 0".to_string());
    }
    let half_short_side = config.screen.width.min(config.screen.height) as f32 / 2.0;
    if config.viewport_margin < 0.0 || config.viewport_margin >= half_short_side {
        return Err(format!(
            "Config validation failed: viewport_margin must be in [0, {half_short_side})"
        ));
    }
    if !(0.0..1.0).contains(&config.dead_zone) {
        return Err("Config validation failed: dead_zone must be in [0, 1)".to_string());
    }
    if config.chest_count > MAX_CHEST_COUNT {
        return Err(format!(
            "Config validation failed: chest_count {} exceeds {MAX_CHEST_COUNT}",
            config.chest_count
        ));
    }
    if config.movement_speed < 0.0 || config.bullet_speed <= 0.0 || config.angle_speed < 0.0 {
        return Err("Config validation failed: speeds must not be negative".to_string());
    }
    for (name, def) in [
        ("player", &config.sprites.player),
        ("wall", &config.sprites.wall),
        ("chest", &config.sprites.chest),
        ("bullet", &config.sprites.bullet),
    ] {
        if def.width <= 0.0 || def.height <= 0.0 {
            return Err(format!(
                "Config validation failed: sprite '{name}' must have positive width and height"
            ));
        }
    }
    for run in &config.walls {
        if run.step <= 0 {
            return Err(format!(
                "Config validation failed: wall run at {} has non-positive step {}",
                run.at, run.step
            ));
        }
    }
    let b = &config.bullet_bounds;
    if b.left >= b.right || b.bottom >= b.top {
        return Err("Config validation failed: bullet_bounds is empty".to_string());
    }
    Ok(())
}

/// Polls a file's modification time so edits can be picked up between frames.
pub struct ConfigWatcher {
    path: PathBuf,
    last_seen_modified: Option<SystemTime>,
}

impl ConfigWatcher {
    pub fn new(path: PathBuf) -> Self {
        let last_seen_modified = modified_time(&path);
        Self {
            path,
            last_seen_modified,
        }
    }

    pub fn should_reload(&mut self) -> bool {
        let current = modified_time(&self.path);
        match (self.last_seen_modified, current) {
            (Some(old), Some(now)) if now > old => {
                self.last_seen_modified = Some(now);
                true
            }
            (None, Some(now)) => {
                self.last_seen_modified = Some(now);
                true
            }
            _ => false,
        }
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok()?.modified().ok()
}
