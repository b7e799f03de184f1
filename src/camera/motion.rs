//! Camera ownership across the session.
//!
//! [`CameraMotionState`] holds the swoop, scroll, parallax and compositor
//! state that event handlers mutate. The camera itself is only written from
//! [`CameraMotionState::frame`]: by the swoop until it completes, by the
//! compositor afterwards, never both in one frame.

use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

use super::compositor::{CameraCompositor, Smoothing};
use super::core::Camera;
use super::parallax::PointerTracker;
use super::scroll::ScrollMapper;
use super::swoop::CameraSwoop;
use crate::options::Options;
use crate::util::easing::EasingFunction;

/// Who currently owns the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Subject not loaded yet; nothing moves the camera.
    Waiting,
    /// Intro swoop in flight.
    Swooping,
    /// Compositor follows scroll and pointer.
    Following,
}

/// What a frame did to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Camera untouched.
    Idle,
    /// Swoop moved the camera.
    Swooping {
        /// Linear swoop progress in [0, 1].
        progress: f32,
    },
    /// Swoop reached its end this frame and control passed to scroll.
    HandedOff,
    /// Compositor moved the camera toward scroll base + parallax.
    Following,
}

impl FrameOutcome {
    /// Whether the camera eye was written this frame.
    #[must_use]
    pub fn moved_camera(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Session-long camera motion state.
#[derive(Debug, Clone)]
pub struct CameraMotionState {
    swoop_target: Vec3,
    swoop_duration: Duration,
    swoop_easing: EasingFunction,
    swoop: Option<CameraSwoop>,
    scroll: ScrollMapper,
    pointer: PointerTracker,
    compositor: CameraCompositor,
    anchor: Option<Vec3>,
    viewport: Vec2,
}

impl CameraMotionState {
    /// Build the motion state for a viewport of the given size.
    #[must_use]
    pub fn new(options: &Options, viewport: Vec2) -> Self {
        Self {
            swoop_target: Vec3::from_array(options.swoop.target),
            swoop_duration: options.swoop.duration(),
            swoop_easing: options.swoop.easing,
            swoop: None,
            scroll: ScrollMapper::new(&options.scroll, viewport.y),
            pointer: PointerTracker::new(options.parallax.multiplier),
            compositor: CameraCompositor::new(Smoothing::from(&options.smoothing)),
            anchor: None,
            viewport,
        }
    }

    /// Start the swoop from the camera's current eye toward the resting
    /// position, aimed at `anchor`. A missing anchor or a swoop that has
    /// already started makes this a no-op. Returns whether it started.
    pub fn begin_swoop(
        &mut self,
        camera: &Camera,
        anchor: Option<Vec3>,
        now: Instant,
    ) -> bool {
        let Some(anchor) = anchor else {
            return false;
        };
        if self.swoop.is_some() {
            log::debug!("swoop already started, ignoring");
            return false;
        }
        self.anchor = Some(anchor);
        self.swoop = Some(CameraSwoop::start(
            camera.eye,
            self.swoop_target,
            self.swoop_duration,
            self.swoop_easing,
            now,
        ));
        true
    }

    /// Scroll handler. Returns whether the scroll base position moved.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.scroll.on_scroll(offset)
    }

    /// Pointer-move handler, in viewport pixels.
    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        self.pointer.on_pointer_move(pointer, self.viewport);
    }

    /// Resize handler.
    pub fn on_resize(&mut self, camera: &mut Camera, viewport: Vec2) {
        if !(viewport.x > 0.0 && viewport.y > 0.0 && viewport.is_finite()) {
            log::debug!("ignoring degenerate viewport {viewport}");
            return;
        }
        self.viewport = viewport;
        self.scroll.set_viewport_height(viewport.y);
        camera.resize(viewport.x, viewport.y);
    }

    /// Advance one render tick.
    pub fn frame(&mut self, camera: &mut Camera, now: Instant, dt: f32) -> FrameOutcome {
        let (Some(swoop), Some(anchor)) = (self.swoop.as_mut(), self.anchor) else {
            return FrameOutcome::Idle;
        };

        if !swoop.is_completed() {
            let tick = swoop.tick(now);
            camera.eye = tick.position;
            camera.look_at(anchor);
            if tick.completed_now {
                self.scroll.activate(swoop.target());
                return FrameOutcome::HandedOff;
            }
            return FrameOutcome::Swooping {
                progress: tick.progress,
            };
        }

        camera.eye = self.compositor.step(
            camera.eye,
            self.scroll.base_position(),
            self.pointer.offset(),
            dt,
        );
        camera.look_at(anchor);
        FrameOutcome::Following
    }

    /// Who owns the camera right now.
    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        match &self.swoop {
            None => MotionPhase::Waiting,
            Some(swoop) if !swoop.is_completed() => MotionPhase::Swooping,
            Some(_) => MotionPhase::Following,
        }
    }

    /// Where the compositor is heading (scroll base + parallax).
    #[must_use]
    pub fn camera_target(&self) -> Vec3 {
        CameraCompositor::target(self.scroll.base_position(), self.pointer.offset())
    }

    /// Swoop state, once started.
    #[must_use]
    pub fn swoop(&self) -> Option<&CameraSwoop> {
        self.swoop.as_ref()
    }

    /// Scroll mapper state.
    #[must_use]
    pub fn scroll(&self) -> &ScrollMapper {
        &self.scroll
    }

    /// Pointer parallax state.
    #[must_use]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Subject look-at point, once loaded.
    #[must_use]
    pub fn anchor(&self) -> Option<Vec3> {
        self.anchor
    }

    /// Last known viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
