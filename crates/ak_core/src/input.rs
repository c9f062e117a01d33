//! Input state tracking.
//!
//! Key transitions are queued in arrival order and replayed to the game as
//! press/release callbacks. A key released and pressed again between two fixed
//! steps must end up pressed, so the order matters. `is_just_pressed` answers
//! the one-shot commands (quit, overlay, restart).
//!
//! Both are cleared by `end_frame()`, which the main loop calls only after at
//! least one fixed step consumed them, so input landing on a frame with zero
//! simulation steps is not lost.
//!
//! Mouse clicks are queued together with the cursor position at the time of the
//! click, since a projectile is aimed at that point and not wherever the cursor
//! drifted to before the next step.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Escape,
    F3,
    R,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub transition: KeyTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

/// A mouse press captured in window coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseClick {
    pub button: MouseBtn,
    pub x: f64,
    pub y: f64,
}

/// Analog stick reading in `[-1, 1]`, x right and y up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickAxes {
    pub x: f32,
    pub y: f32,
}

pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
    key_events: Vec<KeyEvent>,

    mouse_held: HashSet<MouseBtn>,
    clicks: Vec<MouseClick>,

    pub mouse_position: (f64, f64),
    pub stick: StickAxes,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
            key_events: Vec::new(),
            mouse_held: HashSet::new(),
            clicks: Vec::new(),
            mouse_position: (0.0, 0.0),
            stick: StickAxes::default(),
        }
    }

    /// OS key repeat arrives as extra presses of a held key; those are dropped.
    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
            self.key_events.push(KeyEvent {
                key,
                transition: KeyTransition::Pressed,
            });
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.held.remove(&key) {
            self.key_events.push(KeyEvent {
                key,
                transition: KeyTransition::Released,
            });
        }
    }

    pub fn mouse_down(&mut self, button: MouseBtn) {
        if self.mouse_held.insert(button) {
            self.clicks.push(MouseClick {
                button,
                x: self.mouse_position.0,
                y: self.mouse_position.1,
            });
        }
    }

    pub fn mouse_up(&mut self, button: MouseBtn) {
        self.mouse_held.remove(&button);
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Key transitions since the last `end_frame()`, oldest first.
    pub fn key_events(&self) -> &[KeyEvent] {
        &self.key_events
    }

    /// Clicks recorded since the last `end_frame()`, oldest first.
    pub fn clicks(&self) -> &[MouseClick] {
        &self.clicks
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.key_events.clear();
        self.clicks.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(key: Key) -> KeyEvent {
        KeyEvent {
            key,
            transition: KeyTransition::Pressed,
        }
    }

    fn released(key: Key) -> KeyEvent {
        KeyEvent {
            key,
            transition: KeyTransition::Released,
        }
    }

    #[test]
    fn test_key_down_sets_held_and_just_pressed() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.held.contains(&Key::Left));
        assert!(input.is_just_pressed(Key::Left));
        assert_eq!(input.key_events(), &[pressed(Key::Left)]);
    }

    #[test]
    fn test_key_up_clears_held_and_queues_release() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.key_up(Key::Up);
        assert!(!input.held.contains(&Key::Up));
        assert_eq!(input.key_events(), &[pressed(Key::Up), released(Key::Up)]);
    }

    #[test]
    fn test_key_up_without_down_is_no_op() {
        let mut input = InputState::new();
        input.key_up(Key::Right);
        assert!(input.key_events().is_empty());
        assert!(!input.held.contains(&Key::Right));
    }

    #[test]
    fn test_key_repeat_does_not_queue_extra_presses() {
        let mut input = InputState::new();
        input.key_down(Key::Down);
        input.key_down(Key::Down);
        assert_eq!(input.key_events(), &[pressed(Key::Down)]);
    }

    #[test]
    fn test_end_frame_keeps_held_keys() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Up);
        input.end_frame();
        assert!(!input.is_just_pressed(Key::Left));
        assert!(!input.is_just_pressed(Key::Up));
        assert!(input.held.contains(&Key::Left));
        assert!(input.held.contains(&Key::Up));
        assert!(input.key_events().is_empty());
    }

    #[test]
    fn test_release_then_repress_keeps_arrival_order() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.end_frame();

        input.key_up(Key::Up);
        input.key_down(Key::Up);

        assert!(input.held.contains(&Key::Up));
        assert_eq!(input.key_events(), &[released(Key::Up), pressed(Key::Up)]);
        assert_eq!(
            input.key_events().last().map(|e| e.transition),
            Some(KeyTransition::Pressed)
        );
    }

    #[test]
    fn test_click_records_cursor_position_at_press_time() {
        let mut input = InputState::new();
        input.mouse_position = (120.0, 40.0);
        input.mouse_down(MouseBtn::Left);
        input.mouse_position = (500.0, 500.0);

        assert_eq!(
            input.clicks(),
            &[MouseClick {
                button: MouseBtn::Left,
                x: 120.0,
                y: 40.0,
            }]
        );
        assert!(input.mouse_held.contains(&MouseBtn::Left));
    }

    #[test]
    fn test_held_mouse_button_does_not_queue_repeat_clicks() {
        let mut input = InputState::new();
        input.mouse_down(MouseBtn::Left);
        input.mouse_down(MouseBtn::Left);
        assert_eq!(input.clicks().len(), 1);

        input.mouse_up(MouseBtn::Left);
        input.mouse_down(MouseBtn::Left);
        assert_eq!(input.clicks().len(), 2);
    }

    #[test]
    fn test_end_frame_clears_clicks() {
        let mut input = InputState::new();
        input.mouse_down(MouseBtn::Right);
        input.end_frame();
        assert!(input.clicks().is_empty());
        assert!(input.mouse_held.contains(&MouseBtn::Right));
    }

    #[test]
    fn test_default_state_is_empty() {
        let input = InputState::new();
        assert!(input.held.is_empty());
        assert!(!input.is_just_pressed(Key::Escape));
        assert!(input.key_events().is_empty());
        assert!(input.clicks().is_empty());
        assert_eq!(input.stick, StickAxes::default());
    }
}
