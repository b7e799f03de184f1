use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether the compositor's smoothing factor applies per frame or per
/// unit of time.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Fixed fraction of the remaining distance every frame.
    PerFrame,
    /// Fraction scaled by frame delta so the motion is frame-rate
    /// independent.
    #[default]
    TimeBased,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
/// Compositor smoothing toward the scroll + parallax target.
pub struct SmoothingOptions {
    /// Frame-coupled or time-based decay.
    #[schemars(skip)]
    pub mode: SmoothingMode,
    /// Fraction of the remaining distance covered per reference frame.
    #[schemars(title = "Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub factor: f32,
    /// Frame rate the factor is calibrated against in time-based mode.
    #[schemars(skip)]
    pub reference_hz: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            mode: SmoothingMode::TimeBased,
            factor: 0.1,
            reference_hz: 60.0,
        }
    }
}
