//! Brick Rush - a browser brick-breaker game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle entity, motion control)
//! - `input`: Per-frame input snapshots (keyboard/mouse/touch arbitration)
//! - `settings`: Motion control configuration

pub mod input;
pub mod settings;
pub mod sim;

pub use input::{InputSnapshot, InputState};
pub use settings::{ControlConfig, ControlConfigPatch};
pub use sim::{ControlState, MotionController, Paddle, PaddleState};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (CSS pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    /// Keyboard paddle speed in px/s (7 px per reference frame)
    pub const PADDLE_SPEED: f32 = 420.0;

    /// Default fraction of remaining distance closed per reference frame
    pub const SMOOTHING_RATE_DEFAULT: f32 = 0.15;
    /// Distance below which smoothing snaps exactly to target
    pub const CONVERGENCE_EPSILON: f32 = 1.0;
    /// Reference frame rate the smoothing rate is expressed against
    pub const REFERENCE_FRAME_HZ: f32 = 60.0;

    /// Maximum frame delta fed to the simulation (tab-switch hitches)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
