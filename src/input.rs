//! Per-frame input snapshots
//!
//! Event handlers feed raw device values into [`InputState`]; the game loop
//! queries one immutable [`InputSnapshot`] per frame. Exactly one device
//! governs paddle motion at a time: whichever source produced the most
//! recent event holds the tag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable view of the governing input device for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputSnapshot {
    Keyboard { left: bool, right: bool },
    Mouse { x: Option<f32> },
    Touch { x: Option<f32> },
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::Keyboard {
            left: false,
            right: false,
        }
    }
}

/// Which source produced the most recent input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ActiveDevice {
    #[default]
    Keyboard,
    Mouse,
    Touch,
}

/// Accumulated raw input state, fed by platform event handlers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    device: ActiveDevice,
    left: bool,
    right: bool,
    /// Last mouse position, playfield-relative
    mouse: Option<Vec2>,
    /// Last touch position, playfield-relative (cleared on touch end)
    touch: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press/release. Returns true if the key maps to paddle
    /// motion (callers use this to suppress default browser behavior).
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "ArrowLeft" | "a" | "A" => self.left = pressed,
            "ArrowRight" | "d" | "D" => self.right = pressed,
            _ => return false,
        }
        self.device = ActiveDevice::Keyboard;
        true
    }

    pub fn mouse_move(&mut self, pos: Vec2) {
        self.mouse = Some(pos);
        self.device = ActiveDevice::Mouse;
    }

    pub fn touch_move(&mut self, pos: Vec2) {
        self.touch = Some(pos);
        self.device = ActiveDevice::Touch;
    }

    /// Last finger lifted. The device tag stays on touch; frames until the
    /// next event simply carry no coordinate.
    pub fn touch_end(&mut self) {
        self.touch = None;
    }

    /// Latest state as an immutable snapshot. Never blocks, never queues.
    pub fn snapshot(&self) -> InputSnapshot {
        match self.device {
            ActiveDevice::Keyboard => InputSnapshot::Keyboard {
                left: self.left,
                right: self.right,
            },
            ActiveDevice::Mouse => InputSnapshot::Mouse {
                x: self.mouse.map(|p| p.x),
            },
            ActiveDevice::Touch => InputSnapshot::Touch {
                x: self.touch.map(|p| p.x),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_idle_keyboard() {
        let input = InputState::new();
        assert_eq!(
            input.snapshot(),
            InputSnapshot::Keyboard {
                left: false,
                right: false
            }
        );
    }

    #[test]
    fn test_key_events_set_and_clear_flags() {
        let mut input = InputState::new();
        assert!(input.key_event("ArrowLeft", true));
        assert_eq!(
            input.snapshot(),
            InputSnapshot::Keyboard {
                left: true,
                right: false
            }
        );

        assert!(input.key_event("d", true));
        assert_eq!(
            input.snapshot(),
            InputSnapshot::Keyboard {
                left: true,
                right: true
            }
        );

        assert!(input.key_event("ArrowLeft", false));
        assert_eq!(
            input.snapshot(),
            InputSnapshot::Keyboard {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut input = InputState::new();
        input.mouse_move(Vec2::new(120.0, 40.0));
        assert!(!input.key_event("Escape", true));
        // Device tag untouched by unmapped keys
        assert_eq!(input.snapshot(), InputSnapshot::Mouse { x: Some(120.0) });
    }

    #[test]
    fn test_most_recent_event_owns_the_device_tag() {
        let mut input = InputState::new();
        input.mouse_move(Vec2::new(300.0, 100.0));
        assert_eq!(input.snapshot(), InputSnapshot::Mouse { x: Some(300.0) });

        input.key_event("ArrowRight", true);
        assert_eq!(
            input.snapshot(),
            InputSnapshot::Keyboard {
                left: false,
                right: true
            }
        );

        input.touch_move(Vec2::new(50.0, 200.0));
        assert_eq!(input.snapshot(), InputSnapshot::Touch { x: Some(50.0) });

        // Mouse position survives while another device governs
        input.mouse_move(Vec2::new(310.0, 100.0));
        assert_eq!(input.snapshot(), InputSnapshot::Mouse { x: Some(310.0) });
    }

    #[test]
    fn test_touch_end_clears_coordinate_but_keeps_device() {
        let mut input = InputState::new();
        input.touch_move(Vec2::new(75.0, 400.0));
        input.touch_end();
        assert_eq!(input.snapshot(), InputSnapshot::Touch { x: None });
    }
}
