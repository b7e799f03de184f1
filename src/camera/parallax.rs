//! Pointer position → small parallax offset.

use glam::{Vec2, Vec3};

/// Tracks the pointer and converts it into a bounded camera offset.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    offset: Vec3,
    multiplier: f32,
}

impl PointerTracker {
    /// Create a tracker with the pointer assumed at the viewport center.
    #[must_use]
    pub fn new(multiplier: f32) -> Self {
        Self {
            offset: Vec3::ZERO,
            multiplier,
        }
    }

    /// Map a pointer position into [-0.5, 0.5] on each axis.
    #[must_use]
    pub fn normalize(pointer: Vec2, viewport: Vec2) -> Vec2 {
        Vec2::new(
            normalize_axis(pointer.x, viewport.x),
            normalize_axis(pointer.y, viewport.y),
        )
    }

    /// Offset for a normalized pointer position. Screen Y grows downward,
    /// world Y grows upward.
    #[must_use]
    pub fn offset_for(&self, normalized: Vec2) -> Vec3 {
        Vec3::new(
            normalized.x * self.multiplier,
            -normalized.y * self.multiplier,
            0.0,
        )
    }

    /// Record a pointer move in viewport pixels.
    pub fn on_pointer_move(&mut self, pointer: Vec2, viewport: Vec2) {
        self.offset = self.offset_for(Self::normalize(pointer, viewport));
    }

    /// Current parallax offset.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Largest displacement on either axis.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        0.5 * self.multiplier.abs()
    }
}

fn normalize_axis(coord: f32, dimension: f32) -> f32 {
    if !(dimension > 0.0 && dimension.is_finite()) || !coord.is_finite() {
        return 0.0;
    }
    (coord / dimension - 0.5).clamp(-0.5, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

    #[test]
    fn center_pointer_has_no_offset() {
        for multiplier in [0.0, 1.5, 40.0] {
            let mut tracker = PointerTracker::new(multiplier);
            tracker.on_pointer_move(VIEWPORT * 0.5, VIEWPORT);
            assert_eq!(tracker.offset(), Vec3::ZERO);
        }
    }

    #[test]
    fn corners_hit_the_bounds() {
        let mut tracker = PointerTracker::new(1.5);
        tracker.on_pointer_move(Vec2::ZERO, VIEWPORT);
        assert_eq!(tracker.offset(), Vec3::new(-0.75, 0.75, 0.0));

        tracker.on_pointer_move(VIEWPORT, VIEWPORT);
        assert_eq!(tracker.offset(), Vec3::new(0.75, -0.75, 0.0));
        assert_eq!(tracker.max_offset(), 0.75);
    }

    #[test]
    fn pointer_outside_viewport_is_clamped() {
        let n = PointerTracker::normalize(Vec2::new(-300.0, 5000.0), VIEWPORT);
        assert_eq!(n, Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn degenerate_viewport_reads_as_center() {
        let n = PointerTracker::normalize(Vec2::new(10.0, f32::NAN), Vec2::new(0.0, 900.0));
        assert_eq!(n, Vec2::ZERO);
    }
}
