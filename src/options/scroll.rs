use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How many pixels of scrolling span the full dolly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScrollRange {
    /// A fixed pixel count.
    Pixels {
        /// Scroll offset at which the dolly reaches its end anchor.
        px: f32,
    },
    /// A multiple of the viewport height, re-resolved on resize.
    ViewportHeights {
        /// Number of viewport heights.
        count: f32,
    },
}

impl ScrollRange {
    /// Resolve to pixels for the given viewport height.
    #[must_use]
    pub fn resolve(self, viewport_height: f32) -> f32 {
        match self {
            Self::Pixels { px } => px,
            Self::ViewportHeights { count } => count * viewport_height,
        }
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::ViewportHeights { count: 2.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Scroll-driven dolly between two anchors.
pub struct ScrollOptions {
    /// Anchor positions, start then end.
    #[schemars(skip)]
    pub anchors: ScrollAnchorOptions,
    /// Scroll distance covering the whole dolly.
    #[schemars(skip)]
    pub range: ScrollRange,
}

/// Start and end anchors of the scroll dolly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ScrollAnchorOptions {
    /// Camera base position at zero scroll.
    pub start: [f32; 3],
    /// Camera base position at the end of the scroll range.
    pub end: [f32; 3],
}

impl Default for ScrollAnchorOptions {
    fn default() -> Self {
        Self {
            start: [-5.0, 2.0, 8.0],
            end: [-2.5, 1.0, 8.0],
        }
    }
}
