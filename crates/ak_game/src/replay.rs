//! Scripted input sequences for determinism checks.

use ak_core::input::{Key, StickAxes};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::JoyButton;
use crate::game::GameState;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayFrame {
    #[serde(default)]
    pub stick_x: f32,
    #[serde(default)]
    pub stick_y: f32,
    #[serde(default)]
    pub press: Vec<ReplayKey>,
    #[serde(default)]
    pub release: Vec<ReplayKey>,
    #[serde(default)]
    pub buttons: Vec<JoyButton>,
    /// Window-space mouse click fired at the start of the frame.
    #[serde(default)]
    pub click: Option<(f64, f64)>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReplayKey {
    Left,
    Right,
    Up,
    Down,
}

impl From<ReplayKey> for Key {
    fn from(key: ReplayKey) -> Self {
        match key {
            ReplayKey::Left => Key::Left,
            ReplayKey::Right => Key::Right,
            ReplayKey::Up => Key::Up,
            ReplayKey::Down => Key::Down,
        }
    }
}

impl ReplaySequence {
    /// Drive `game` through every frame. Events (key edges, clicks, buttons)
    /// fire only on the first repetition of a frame.
    pub fn play(&self, game: &mut GameState) {
        for frame in &self.frames {
            for i in 0..frame.repeat.max(1) {
                if i == 0 {
                    for &key in &frame.press {
                        game.on_key_press(key.into());
                    }
                    for &key in &frame.release {
                        game.on_key_release(key.into());
                    }
                    for &button in &frame.buttons {
                        game.on_joybutton_press(button);
                        game.on_joybutton_release(button);
                    }
                    if let Some((x, y)) = frame.click {
                        game.on_mouse_press(x, y);
                    }
                }
                game.update(StickAxes {
                    x: frame.stick_x.clamp(-1.0, 1.0),
                    y: frame.stick_y.clamp(-1.0, 1.0),
                });
            }
        }
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    Ok(replay)
}

const fn default_repeat() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "ak_replay_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn seeded_game() -> GameState {
        GameState::new(GameConfig {
            chest_seed: Some(2024),
            ..GameConfig::default()
        })
    }

    const SCRIPT: &str = r#"{
      "frames": [
        { "stick_x": 1.0, "repeat": 40 },
        { "press": ["left"], "repeat": 9 },
        { "release": ["left"], "press": ["up"], "repeat": 80 },
        { "release": ["up"], "buttons": ["Start"], "click": [100.0, 100.0] },
        { "stick_x": -0.7, "stick_y": 0.7, "repeat": 120 },
        { "stick_y": -1.0, "repeat": 200 }
      ]
    }"#;

    #[test]
    fn replay_rejects_empty_frames() {
        let path = temp_file_path("empty");
        fs::write(&path, r#"{ "frames": [] }"#).expect("write replay file");
        let err = load_replay_from_path(&path).expect_err("empty replay should fail");
        assert!(err.contains("frames list is empty"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn replay_run_is_deterministic() {
        let path = temp_file_path("deterministic");
        fs::write(&path, SCRIPT).expect("write replay file");
        let replay = load_replay_from_path(&path).expect("replay should load");

        let mut run_a = seeded_game();
        let mut run_b = seeded_game();
        replay.play(&mut run_a);
        replay.play(&mut run_b);

        assert_eq!(run_a.player, run_b.player);
        assert_eq!(run_a.score, run_b.score);
        assert_eq!(run_a.chests, run_b.chests);
        assert_eq!(run_a.viewport, run_b.viewport);
        assert_eq!(run_a.bullets.len(), run_b.bullets.len());
        assert_eq!(run_a.chests.len() as u32 + run_a.score, 10);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn replay_keeps_player_inside_walls() {
        let path = temp_file_path("inside");
        fs::write(&path, SCRIPT).expect("write replay file");
        let replay = load_replay_from_path(&path).expect("replay should load");

        let mut game = seeded_game();
        replay.play(&mut game);
        let p = &game.player.sprite;
        assert!(p.left() >= -668.0 - 1e-3 && p.right() <= 1668.0 + 1e-3);
        assert!(p.bottom() >= -268.0 - 1e-3 && p.top() <= 993.0 + 1e-3);

        let _ = fs::remove_file(path);
    }
}
