//! Frame timing: per-frame deltas and a smoothed FPS readout.

use web_time::{Duration, Instant};

/// Longest frame delta handed to the compositor. Browsers stop firing
/// animation frames for hidden tabs, so the first frame after returning
/// can report seconds of elapsed time.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame timing with delta computation and a smoothed FPS readout.
pub struct FrameTiming {
    /// Timestamp of the previous frame, `None` before the first frame.
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Record a frame at `now` and return the seconds elapsed since the
    /// previous one, capped at [`MAX_FRAME_DELTA`]. The first frame
    /// reports zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let frame_time = now.saturating_duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(MAX_FRAME_DELTA.as_secs_f32())
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
