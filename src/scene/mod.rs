//! Scene collaborators the camera rig depends on: the subject model load
//! and the environment parameters.

pub mod asset;
pub mod environment;

pub use asset::{AssetStatus, AssetTracker};
pub use environment::{sun_direction, Environment};
