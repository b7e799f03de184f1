//! One-shot intro animation from the establishing shot to the resting
//! position.
//!
//! Every tick is a pure function of the elapsed wall-clock time since the
//! swoop began, so repeated or dropped frames never accumulate drift.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Result of advancing the swoop to a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwoopTick {
    /// Camera eye position for this frame.
    pub position: Vec3,
    /// Linear progress ratio in [0, 1] before easing.
    pub progress: f32,
    /// `true` only on the tick that first reached the end.
    pub completed_now: bool,
}

/// Timed camera swoop state.
#[derive(Debug, Clone)]
pub struct CameraSwoop {
    start: Vec3,
    target: Vec3,
    start_time: Instant,
    duration: Duration,
    easing: EasingFunction,
    completed: bool,
}

impl CameraSwoop {
    /// Begin a swoop from `start` to `target` at time `now`.
    #[must_use]
    pub fn start(
        start: Vec3,
        target: Vec3,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) -> Self {
        log::debug!(
            "swoop {start} -> {target} over {:.2}s",
            duration.as_secs_f32()
        );
        Self {
            start,
            target,
            start_time: now,
            duration,
            easing,
            completed: false,
        }
    }

    /// Linear progress ratio at `now`, clamped to [0, 1]. A zero-length
    /// swoop is complete immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eye position at `now`. Does not touch the completion flag.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> Vec3 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        self.start.lerp(self.target, self.easing.evaluate(t))
    }

    /// Advance to `now`. Once complete, always returns the target and never
    /// reports completion again.
    pub fn tick(&mut self, now: Instant) -> SwoopTick {
        if self.completed {
            return SwoopTick {
                position: self.target,
                progress: 1.0,
                completed_now: false,
            };
        }

        let progress = self.progress(now);
        let completed_now = progress >= 1.0;
        if completed_now {
            self.completed = true;
            log::info!("swoop complete at {}", self.target);
        }

        SwoopTick {
            position: self.position_at(now),
            progress,
            completed_now,
        }
    }

    /// Whether the swoop has reached its target.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Where the swoop began.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        self.start
    }

    /// Resting position the swoop ends at.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Configured swoop length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_second_swoop(now: Instant) -> CameraSwoop {
        CameraSwoop::start(
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Duration::from_secs(2),
            EasingFunction::SwoopBlend,
            now,
        )
    }

    #[test]
    fn halfway_lands_at_midpoint() {
        let t0 = Instant::now();
        let mut swoop = two_second_swoop(t0);
        let tick = swoop.tick(t0 + Duration::from_secs(1));
        assert_eq!(tick.progress, 0.5);
        assert!((tick.position.x - 5.0).abs() < 1e-6);
        assert!(!tick.completed_now);
        assert!(!swoop.is_completed());
    }

    #[test]
    fn ticks_are_idempotent_in_time() {
        let t0 = Instant::now();
        let mut swoop = two_second_swoop(t0);
        let at = t0 + Duration::from_millis(700);
        let a = swoop.tick(at);
        let b = swoop.tick(at);
        assert_eq!(a, b);
    }

    #[test]
    fn completes_exactly_once() {
        let t0 = Instant::now();
        let mut swoop = two_second_swoop(t0);
        let first = swoop.tick(t0 + Duration::from_secs(2));
        assert!(first.completed_now);
        assert_eq!(first.position, Vec3::new(10.0, 0.0, 0.0));
        assert!(swoop.is_completed());

        for extra in [2, 3, 60] {
            let later = swoop.tick(t0 + Duration::from_secs(extra));
            assert!(!later.completed_now);
            assert_eq!(later.progress, 1.0);
            assert_eq!(later.position, swoop.target());
        }
    }

    #[test]
    fn overshooting_elapsed_clamps_progress() {
        let t0 = Instant::now();
        let swoop = two_second_swoop(t0);
        assert_eq!(swoop.progress(t0 + Duration::from_secs(30)), 1.0);
    }

    #[test]
    fn clock_before_start_reads_as_zero() {
        let t0 = Instant::now() + Duration::from_secs(5);
        let swoop = two_second_swoop(t0);
        assert_eq!(swoop.progress(Instant::now()), 0.0);
        assert_eq!(swoop.position_at(Instant::now()), Vec3::ZERO);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let t0 = Instant::now();
        let mut swoop = CameraSwoop::start(
            Vec3::ONE,
            Vec3::splat(4.0),
            Duration::ZERO,
            EasingFunction::SwoopBlend,
            t0,
        );
        let tick = swoop.tick(t0);
        assert!(tick.completed_now);
        assert_eq!(tick.position, Vec3::splat(4.0));
    }

    #[test]
    fn path_stays_between_endpoints() {
        let t0 = Instant::now();
        let swoop = two_second_swoop(t0);
        let mut prev = 0.0;
        for ms in (0..=2000).step_by(50) {
            let x = swoop.position_at(t0 + Duration::from_millis(ms)).x;
            assert!((0.0..=10.0).contains(&x));
            assert!(x >= prev);
            prev = x;
        }
    }
}
