//! Debug-panel hook.
//!
//! The slider widgets belong to the host page. The session only tells the
//! panel when it has moved the camera so the displayed values stay in sync.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera position as the panel shows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Camera")]
pub struct CameraReadout {
    /// Eye X.
    #[schemars(title = "Camera X", range(min = -100.0, max = 100.0), extend("step" = 0.1))]
    pub x: f32,
    /// Eye Y.
    #[schemars(title = "Camera Y", range(min = -100.0, max = 100.0), extend("step" = 0.1))]
    pub y: f32,
    /// Eye Z.
    #[schemars(title = "Camera Z", range(min = -100.0, max = 100.0), extend("step" = 0.1))]
    pub z: f32,
}

impl CameraReadout {
    /// Slider metadata for the camera folder.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CameraReadout)
    }
}

impl From<Vec3> for CameraReadout {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<CameraReadout> for Vec3 {
    fn from(r: CameraReadout) -> Self {
        Self::new(r.x, r.y, r.z)
    }
}

/// Receives camera position updates for display.
pub trait PanelRefresh {
    /// The session moved the camera to `readout`.
    fn refresh_camera(&mut self, readout: CameraReadout);
}

/// No panel attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPanel;

impl PanelRefresh for NoPanel {
    fn refresh_camera(&mut self, _readout: CameraReadout) {}
}

/// Keeps every readout it receives. Useful for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingPanel {
    /// Readouts in the order they arrived.
    pub readouts: Vec<CameraReadout>,
}

impl RecordingPanel {
    /// Most recent readout.
    #[must_use]
    pub fn last(&self) -> Option<CameraReadout> {
        self.readouts.last().copied()
    }
}

impl PanelRefresh for RecordingPanel {
    fn refresh_camera(&mut self, readout: CameraReadout) {
        self.readouts.push(readout);
    }
}

/// Holds only the latest readout until the host collects it with
/// [`PendingReadout::take`]. Lets a host notify its UI after it has stopped
/// borrowing the session, so UI callbacks may call back into it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingReadout {
    pending: Option<CameraReadout>,
}

impl PendingReadout {
    /// Take the readout recorded since the last call, if any.
    pub fn take(&mut self) -> Option<CameraReadout> {
        self.pending.take()
    }
}

impl PanelRefresh for PendingReadout {
    fn refresh_camera(&mut self, readout: CameraReadout) {
        self.pending = Some(readout);
    }
}
