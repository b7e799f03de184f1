//! Load tracking for the subject model.
//!
//! The download itself is done by the host (a glTF loader on the web); the
//! tracker only records what it reports so the session knows whether the
//! swoop may start.

use glam::Vec3;

use crate::error::VantageError;

/// Where the subject model load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    /// Download in flight.
    Loading {
        /// Fraction received in [0, 1], if the total size is known.
        progress: Option<f32>,
    },
    /// Model is in the scene.
    Loaded {
        /// Look-at point of the model.
        anchor: Vec3,
    },
    /// Load failed; the camera stays on its opening pose.
    Failed {
        /// Loader-provided description.
        reason: String,
    },
}

/// Records loader callbacks for the subject model.
#[derive(Debug, Clone)]
pub struct AssetTracker {
    status: AssetStatus,
}

impl AssetTracker {
    /// Tracker for a load that has not reported anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: AssetStatus::Loading { progress: None },
        }
    }

    /// Download progress. Ignored once the load has settled.
    pub fn on_progress(&mut self, loaded: u64, total: u64) {
        let AssetStatus::Loading { progress } = &mut self.status else {
            return;
        };
        if total == 0 {
            log::info!("{loaded} bytes loaded");
            *progress = None;
            return;
        }
        let ratio = (loaded as f64 / total as f64).clamp(0.0, 1.0) as f32;
        log::info!("{:.0}% loaded", ratio * 100.0);
        *progress = Some(ratio);
    }

    /// Successful load. Returns the anchor when this is the first success;
    /// a late success after a failure is ignored.
    pub fn on_loaded(&mut self, anchor: Vec3) -> Option<Vec3> {
        match self.status {
            AssetStatus::Loading { .. } => {
                log::info!("subject loaded, anchor {anchor}");
                self.status = AssetStatus::Loaded { anchor };
                Some(anchor)
            }
            AssetStatus::Loaded { .. } | AssetStatus::Failed { .. } => None,
        }
    }

    /// Failed load. The error is logged and returned for the host to
    /// surface; the camera is left alone.
    pub fn on_failed(&mut self, reason: &str) -> VantageError {
        log::error!("An error occurred while loading the model: {reason}");
        if matches!(self.status, AssetStatus::Loading { .. }) {
            self.status = AssetStatus::Failed {
                reason: reason.to_owned(),
            };
        }
        VantageError::AssetLoad(reason.to_owned())
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &AssetStatus {
        &self.status
    }

    /// Look-at point, once loaded.
    #[must_use]
    pub fn anchor(&self) -> Option<Vec3> {
        match self.status {
            AssetStatus::Loaded { anchor } => Some(anchor),
            _ => None,
        }
    }
}

impl Default for AssetTracker {
    fn default() -> Self {
        Self::new()
    }
}
