//! Joystick input via gilrs.
//!
//! The first connected pad drives the game. Stick axes are sampled every
//! frame; button and d-pad changes are drained as events. Controllers may be
//! plugged in or pulled at any time. Without gilrs the game runs with a
//! centred stick.

use std::collections::HashSet;

use ak_core::input::StickAxes;
use gilrs::{Axis, Button, Event, EventType, GamepadId, Gilrs};

use crate::config::JoyButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoystickEvent {
    ButtonPressed(JoyButton),
    ButtonReleased(JoyButton),
    /// D-pad as a hat: x is -1 left / 1 right, y is -1 down / 1 up.
    HatMotion(i8, i8),
}

pub struct Gamepad {
    gilrs: Option<Gilrs>,
    active: Option<GamepadId>,
    pub name: Option<String>,
    dpad: HashSet<Button>,
}

impl Gamepad {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                log::warn!("Failed to initialize gamepad support: {}", e);
                None
            }
        };

        let mut pad = Self {
            gilrs,
            active: None,
            name: None,
            dpad: HashSet::new(),
        };
        pad.pick_active();
        if pad.active.is_none() {
            log::info!("There are no joysticks.");
        }
        pad
    }

    fn pick_active(&mut self) {
        self.active = None;
        self.name = None;
        if let Some(gilrs) = &self.gilrs {
            if let Some((id, gamepad)) = gilrs.gamepads().find(|(_, g)| g.is_connected()) {
                log::info!("Joystick connected: {}", gamepad.name());
                self.active = Some(id);
                self.name = Some(gamepad.name().to_string());
            }
        }
        self.dpad.clear();
    }

    /// Drain pending events from the active pad.
    pub fn poll(&mut self) -> Vec<JoystickEvent> {
        let mut out = Vec::new();
        let Some(gilrs) = self.gilrs.as_mut() else {
            return out;
        };

        let mut reselect = false;
        while let Some(Event { id, event, .. }) = gilrs.next_event() {
            let routed = route(self.active, id, PadEvent::from(&event), &mut self.dpad);
            reselect |= routed.reselect;
            out.extend(routed.event);
        }

        if reselect {
            self.pick_active();
        }
        out
    }

    /// Current left stick, x right and y up.
    pub fn axes(&self) -> StickAxes {
        match (&self.gilrs, self.active) {
            (Some(gilrs), Some(id)) => {
                let pad = gilrs.gamepad(id);
                StickAxes {
                    x: pad.value(Axis::LeftStickX),
                    y: pad.value(Axis::LeftStickY),
                }
            }
            _ => StickAxes::default(),
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// The parts of a gilrs event the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PadEvent {
    Connected,
    Disconnected,
    Pressed(Button),
    Released(Button),
    Other,
}

impl From<&EventType> for PadEvent {
    fn from(event: &EventType) -> Self {
        match *event {
            EventType::Connected => PadEvent::Connected,
            EventType::Disconnected => PadEvent::Disconnected,
            EventType::ButtonPressed(button, _) => PadEvent::Pressed(button),
            EventType::ButtonReleased(button, _) => PadEvent::Released(button),
            _ => PadEvent::Other,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Routed {
    event: Option<JoystickEvent>,
    /// The active pad must be picked again.
    reselect: bool,
}

/// Decide what one event from pad `id` means, given the active pad.
fn route<Id: PartialEq>(
    active: Option<Id>,
    id: Id,
    event: PadEvent,
    dpad: &mut HashSet<Button>,
) -> Routed {
    let from_active = active.as_ref() == Some(&id);
    match event {
        PadEvent::Connected => Routed {
            event: None,
            reselect: active.is_none(),
        },
        PadEvent::Disconnected if from_active => {
            log::info!("Joystick disconnected");
            Routed {
                event: None,
                reselect: true,
            }
        }
        PadEvent::Pressed(button) if from_active => {
            let event = if is_dpad(button) {
                dpad.insert(button);
                let (x, y) = hat_from_dpad(dpad);
                Some(JoystickEvent::HatMotion(x, y))
            } else {
                map_button(button).map(JoystickEvent::ButtonPressed)
            };
            Routed {
                event,
                reselect: false,
            }
        }
        PadEvent::Released(button) if from_active => {
            let event = if is_dpad(button) {
                dpad.remove(&button);
                let (x, y) = hat_from_dpad(dpad);
                Some(JoystickEvent::HatMotion(x, y))
            } else {
                map_button(button).map(JoystickEvent::ButtonReleased)
            };
            Routed {
                event,
                reselect: false,
            }
        }
        _ => Routed::default(),
    }
}

fn is_dpad(button: Button) -> bool {
    matches!(
        button,
        Button::DPadUp | Button::DPadDown | Button::DPadLeft | Button::DPadRight
    )
}

fn hat_from_dpad(pressed: &HashSet<Button>) -> (i8, i8) {
    let axis = |neg: Button, pos: Button| -> i8 {
        i8::from(pressed.contains(&pos)) - i8::from(pressed.contains(&neg))
    };
    (
        axis(Button::DPadLeft, Button::DPadRight),
        axis(Button::DPadDown, Button::DPadUp),
    )
}

fn map_button(button: Button) -> Option<JoyButton> {
    match button {
        Button::South => Some(JoyButton::South),
        Button::East => Some(JoyButton::East),
        Button::West => Some(JoyButton::West),
        Button::North => Some(JoyButton::North),
        Button::LeftTrigger => Some(JoyButton::LeftTrigger),
        Button::RightTrigger => Some(JoyButton::RightTrigger),
        Button::LeftTrigger2 => Some(JoyButton::LeftTrigger2),
        Button::RightTrigger2 => Some(JoyButton::RightTrigger2),
        Button::Select => Some(JoyButton::Select),
        Button::Start => Some(JoyButton::Start),
        Button::Mode => Some(JoyButton::Mode),
        Button::LeftThumb => Some(JoyButton::LeftThumb),
        Button::RightThumb => Some(JoyButton::RightThumb),
        _ => None,
    }
}
