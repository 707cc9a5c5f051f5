//! Deterministic simulation module
//!
//! All paddle motion logic lives here. This module must be pure and
//! deterministic:
//! - Frame-rate-independent update math only
//! - No rendering or platform dependencies
//! - Single-threaded, strictly sequential ticks

pub mod control;
pub mod paddle;

pub use control::{ControlState, MotionController};
pub use paddle::{Paddle, PaddleState};
