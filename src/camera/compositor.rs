//! Final camera writer once the swoop has finished.
//!
//! Each frame the compositor adds the pointer offset to the scroll base
//! position and moves the eye a fraction of the way there. With the factor
//! in (0, 1] this is an exponential decay toward the target: it converges
//! and never overshoots.

use glam::Vec3;

use crate::options::{SmoothingMode, SmoothingOptions};

/// How the per-frame interpolation weight is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Constant weight per frame regardless of frame duration.
    PerFrame {
        /// Fraction of the remaining distance covered each frame.
        factor: f32,
    },
    /// Weight scaled by frame delta; equals `factor` at `reference_hz`.
    TimeBased {
        /// Fraction of the remaining distance per reference frame.
        factor: f32,
        /// Frame rate `factor` is calibrated against.
        reference_hz: f32,
    },
}

impl Smoothing {
    /// Interpolation weight in [0, 1] for a frame lasting `dt` seconds.
    #[must_use]
    pub fn alpha(self, dt: f32) -> f32 {
        let alpha = match self {
            Self::PerFrame { factor } => factor,
            Self::TimeBased {
                factor,
                reference_hz,
            } => {
                let factor = factor.clamp(0.0, 1.0);
                let frames = (dt * reference_hz).max(0.0);
                1.0 - (1.0 - factor).powf(frames)
            }
        };
        if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        }
    }
}

impl From<&SmoothingOptions> for Smoothing {
    fn from(options: &SmoothingOptions) -> Self {
        match options.mode {
            SmoothingMode::PerFrame => Self::PerFrame {
                factor: options.factor,
            },
            SmoothingMode::TimeBased => Self::TimeBased {
                factor: options.factor,
                reference_hz: options.reference_hz,
            },
        }
    }
}

/// Combines base position and parallax offset into the camera eye.
#[derive(Debug, Clone)]
pub struct CameraCompositor {
    smoothing: Smoothing,
}

impl CameraCompositor {
    /// Create a compositor with the given smoothing.
    #[must_use]
    pub fn new(smoothing: Smoothing) -> Self {
        Self { smoothing }
    }

    /// Combined target for this frame.
    #[must_use]
    pub fn target(base: Vec3, offset: Vec3) -> Vec3 {
        base + offset
    }

    /// Eye position after one frame of `dt` seconds moving from `current`
    /// toward `base + offset`.
    #[must_use]
    pub fn step(&self, current: Vec3, base: Vec3, offset: Vec3, dt: f32) -> Vec3 {
        let target = Self::target(base, offset);
        let alpha = self.smoothing.alpha(dt);
        if alpha >= 1.0 {
            return target;
        }
        current.lerp(target, alpha)
    }

    /// Active smoothing.
    #[must_use]
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }
}
