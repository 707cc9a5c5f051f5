//! Paddle motion controller
//!
//! Arbitrates which input device governs each frame and converts pointer
//! coordinates into frame-rate-independent smoothed motion. Keyboard input
//! takes immediate effect; mouse/touch input either jumps the paddle
//! directly or eases it toward a target at a configurable rate.

use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use crate::consts::{CONVERGENCE_EPSILON, REFERENCE_FRAME_HZ};
use crate::input::InputSnapshot;
use crate::settings::{ControlConfig, ControlConfigPatch};

/// Controller state across frames. A target exists only while a
/// pointer-like device governs and smoothing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlState {
    /// No pending target
    Idle,
    /// Easing toward an absolute paddle position
    Tracking { target: f32 },
}

/// Converts per-frame input snapshots into paddle commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionController {
    config: ControlConfig,
    state: ControlState,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}

impl MotionController {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            state: ControlState::Idle,
        }
    }

    /// Advance one simulation tick.
    ///
    /// Arbitrates the governing device, applies smoothing toward any
    /// pending target, then advances the paddle's own integration exactly
    /// once, whichever branch ran.
    pub fn update(&mut self, paddle: &mut Paddle, snapshot: &InputSnapshot, dt: f32) {
        match *snapshot {
            // Keyboard bypasses smoothing entirely
            InputSnapshot::Keyboard { left, right } => {
                self.state = ControlState::Idle;
                match (left, right) {
                    (true, false) => paddle.move_left(),
                    (false, true) => paddle.move_right(),
                    _ => paddle.stop_moving(),
                }
            }
            InputSnapshot::Mouse { x: Some(x) } | InputSnapshot::Touch { x: Some(x) } => {
                let desired = x - paddle.half_width();
                if self.config.enable_smoothing {
                    // Retarget; easing continues from the current position
                    self.state = ControlState::Tracking { target: desired };
                    paddle.stop_moving();
                } else {
                    self.state = ControlState::Idle;
                    paddle.set_target_position(desired);
                }
            }
            // No coordinate this frame: issue nothing new
            InputSnapshot::Mouse { x: None } | InputSnapshot::Touch { x: None } => {}
        }

        if self.config.enable_smoothing {
            if let ControlState::Tracking { target } = self.state {
                let distance = target - paddle.x;
                if distance.abs() < CONVERGENCE_EPSILON {
                    // Snap exactly; asymptotic approach never terminates
                    paddle.set_target_position(target);
                    self.state = ControlState::Idle;
                } else {
                    let rate = self.config.smoothing_rate;
                    let f = 1.0 - (1.0 - rate).powf(dt * REFERENCE_FRAME_HZ);
                    paddle.set_target_position(paddle.x + distance * f);
                }
            }
        }

        paddle.update(dt);
    }

    /// Merge a partial config; takes effect on the next update. Disabling
    /// smoothing through a patch drops any pending target, same as
    /// [`set_smoothing_enabled`](Self::set_smoothing_enabled).
    pub fn update_config(&mut self, patch: ControlConfigPatch) {
        if patch.enable_smoothing == Some(false) {
            self.state = ControlState::Idle;
        }
        self.config.apply(patch);
    }

    /// Toggling off clears any in-flight target so a stale one can't be
    /// reapplied if smoothing is re-enabled later.
    pub fn set_smoothing_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.state = ControlState::Idle;
        }
        self.config.enable_smoothing = enabled;
    }

    /// Rate is clamped to [0, 1]. 0 never closes distance (updates still
    /// terminate in O(1)); 1 snaps every tick.
    pub fn set_smoothing_rate(&mut self, rate: f32) {
        self.config.smoothing_rate = rate.clamp(0.0, 1.0);
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, ControlState::Tracking { .. })
    }

    /// Session teardown: drop the pending target. The paddle and input
    /// provider are shared collaborators and are left untouched.
    pub fn reset(&mut self) {
        self.state = ControlState::Idle;
    }
}
