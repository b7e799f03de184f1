// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera rig for a decorative 3D landing page.
//!
//! Vantage owns the camera motion of a scene rendered by an external scene
//! graph: a one-shot intro swoop toward the subject once its model loads,
//! then a scroll-driven dolly between two anchors with a small pointer
//! parallax layered on top.
//!
//! # Key entry points
//!
//! - [`session::Session`] - builds the rig and runs the per-frame tick
//! - [`camera::CameraMotionState`] - swoop / scroll / parallax / compositor
//! - [`options::Options`] - tunables with TOML presets and a panel schema
//! - [`input::InputSource`] - where events come from (browser or script)
//!
//! # Camera ownership
//!
//! Until the swoop completes it is the only thing that moves the camera.
//! From the frame it completes, scroll and pointer handlers only update
//! state, and the compositor moves the camera toward scroll base + parallax
//! every frame.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod session;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::VantageError;
pub use session::Session;
