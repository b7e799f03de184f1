//! Camera system for the landing-page scene.
//!
//! Provides the perspective camera, the one-shot intro swoop, the scroll
//! dolly, pointer parallax, and the compositor that blends them.

/// Smoothed blend of scroll base position and parallax offset.
pub mod compositor;
/// Core camera struct and matrix construction.
pub mod core;
/// Session-long motion state and camera ownership.
pub mod motion;
/// Pointer position to parallax offset.
pub mod parallax;
/// Scroll offset to dolly position.
pub mod scroll;
/// Timed intro animation.
pub mod swoop;

pub use self::core::Camera;
pub use compositor::{CameraCompositor, Smoothing};
pub use motion::{CameraMotionState, FrameOutcome, MotionPhase};
pub use parallax::PointerTracker;
pub use scroll::{ScrollAnchors, ScrollMapper};
pub use swoop::{CameraSwoop, SwoopTick};
