//! Input handling: platform-agnostic events and the sources that yield
//! them.

/// Platform-agnostic input events.
pub mod event;
/// Event queues and scripted replay.
pub mod source;

pub use event::InputEvent;
pub use source::{InputSource, QueuedInput, ScriptedInput};
