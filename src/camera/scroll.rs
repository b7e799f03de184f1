//! Scroll offset → progress ratio → camera base position.

use glam::Vec3;

use crate::options::{ScrollOptions, ScrollRange};

/// Fixed endpoints of the scroll dolly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchors {
    /// Base position at zero scroll.
    pub start: Vec3,
    /// Base position at the end of the scroll range.
    pub end: Vec3,
}

impl ScrollAnchors {
    /// Per-axis interpolation between the anchors, clamped so no axis leaves
    /// the [start, end] segment.
    #[must_use]
    pub fn interpolate(&self, ratio: f32) -> Vec3 {
        let ratio = sanitize_ratio(ratio);
        let lo = self.start.min(self.end);
        let hi = self.start.max(self.end);
        self.start.lerp(self.end, ratio).clamp(lo, hi)
    }
}

/// Maps scroll offsets onto the dolly once the swoop hands over control.
#[derive(Debug, Clone)]
pub struct ScrollMapper {
    anchors: ScrollAnchors,
    range: ScrollRange,
    range_px: f32,
    base_position: Vec3,
    active: bool,
    last_offset: f32,
}

impl ScrollMapper {
    /// Create an inactive mapper. `viewport_height` resolves a
    /// viewport-relative range.
    #[must_use]
    pub fn new(options: &ScrollOptions, viewport_height: f32) -> Self {
        let anchors = ScrollAnchors {
            start: Vec3::from_array(options.anchors.start),
            end: Vec3::from_array(options.anchors.end),
        };
        Self {
            anchors,
            range: options.range,
            range_px: options.range.resolve(viewport_height),
            base_position: anchors.start,
            active: false,
            last_offset: 0.0,
        }
    }

    /// Progress ratio for a scroll offset, clamped to [0, 1]. NaN offsets
    /// and a degenerate range map to 0.
    #[must_use]
    pub fn ratio(&self, offset: f32) -> f32 {
        if !(self.range_px > 0.0 && self.range_px.is_finite()) {
            return 0.0;
        }
        sanitize_ratio(offset / self.range_px)
    }

    /// Base position for a progress ratio.
    #[must_use]
    pub fn base_position_for(&self, ratio: f32) -> Vec3 {
        self.anchors.interpolate(ratio)
    }

    /// Record a scroll offset. Moves the base position only once active.
    /// Returns `true` if the base position changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.last_offset = offset;
        if !self.active {
            return false;
        }
        let ratio = self.ratio(offset);
        log::trace!("scroll progress: {:.2}%", ratio * 100.0);
        let base = self.base_position_for(ratio);
        let changed = base != self.base_position;
        self.base_position = base;
        changed
    }

    /// Start responding to scroll, with `resting` as the base position
    /// until the next scroll event.
    pub fn activate(&mut self, resting: Vec3) {
        self.base_position = resting;
        self.active = true;
    }

    /// Re-resolve a viewport-relative range after a resize.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.range_px = self.range.resolve(viewport_height);
    }

    /// Current base position.
    #[must_use]
    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Whether scroll events move the base position.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Most recent scroll offset, observed even while inactive.
    #[must_use]
    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    /// Scroll distance covering the full dolly, in pixels.
    #[must_use]
    pub fn range_px(&self) -> f32 {
        self.range_px
    }

    /// Dolly endpoints.
    #[must_use]
    pub fn anchors(&self) -> ScrollAnchors {
        self.anchors
    }
}

fn sanitize_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}
