//! Time-driven value transitions.

pub mod easing;
pub mod interpolate;
pub mod tween;

pub use easing::Easing;
pub use interpolate::{lerp, Degrees, Interpolate};
pub use tween::Tween;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnimError {
    #[error("tween duration must be positive, got {0}")]
    InvalidDuration(f32),
    #[error("frame delta must not be negative, got {0}")]
    InvalidDelta(f32),
}
