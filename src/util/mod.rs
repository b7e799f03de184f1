//! Shared utilities for the camera rig.
//!
//! Helpers for easing curves and frame timing.

pub mod easing;
pub mod frame_timing;
