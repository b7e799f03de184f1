//! One page session: every stateful piece of the camera rig, built in a
//! fixed order and driven by events plus a per-frame tick.
//!
//! Construction order is options → camera → motion state → asset tracker →
//! environment → frame timing → panel. Handlers only ever touch state that
//! already exists, and the camera is only written from [`Session::frame`]
//! (or an explicit panel edit via [`Session::set_camera_eye`]).

pub mod panel;

use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

pub use panel::{CameraReadout, NoPanel, PanelRefresh, PendingReadout, RecordingPanel};

use crate::camera::{Camera, CameraMotionState, FrameOutcome, MotionPhase};
use crate::error::VantageError;
use crate::input::{InputEvent, InputSource};
use crate::options::Options;
use crate::scene::{AssetStatus, AssetTracker, Environment};
use crate::util::frame_timing::FrameTiming;

/// Camera rig for one page session.
pub struct Session<P: PanelRefresh = NoPanel> {
    options: Options,
    camera: Camera,
    motion: CameraMotionState,
    asset: AssetTracker,
    environment: Environment,
    timing: FrameTiming,
    panel: P,
    started: Instant,
}

impl Session<NoPanel> {
    /// Start a session without a debug panel.
    #[must_use]
    pub fn new(options: Options, viewport: Vec2, now: Instant) -> Self {
        Self::with_panel(options, viewport, NoPanel, now)
    }
}

impl<P: PanelRefresh> Session<P> {
    /// Start a session that reports camera moves to `panel`.
    #[must_use]
    pub fn with_panel(
        options: Options,
        viewport: Vec2,
        mut panel: P,
        now: Instant,
    ) -> Self {
        let camera = Camera::from_options(&options.camera, viewport.x, viewport.y);
        let motion = CameraMotionState::new(&options, viewport);
        let asset = AssetTracker::new();
        let environment =
            Environment::new(&options.sky, &options.water, &options.light, now);
        let timing = FrameTiming::new();
        panel.refresh_camera(camera.eye.into());
        log::debug!("session started, viewport {viewport}, eye {}", camera.eye);

        Self {
            options,
            camera,
            motion,
            asset,
            environment,
            timing,
            panel,
            started: now,
        }
    }

    // ── Event handlers ───────────────────────────────────────────────────

    /// Dispatch one input event. Only a failed asset load is an error, and
    /// it has already been logged by the time it is returned.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Result<(), VantageError> {
        match event {
            InputEvent::Scrolled { offset } => self.on_scroll(offset),
            InputEvent::PointerMoved { x, y } => self.on_pointer_move(x, y),
            InputEvent::Resized { width, height } => self.on_resize(width, height),
            InputEvent::AssetProgress { loaded, total } => {
                self.on_asset_progress(loaded, total);
            }
            InputEvent::AssetLoaded { anchor } => {
                let _ = self.on_asset_loaded(Vec3::from_array(anchor), now);
            }
            InputEvent::AssetFailed { reason } => {
                return Err(self.on_asset_failed(&reason));
            }
        }
        Ok(())
    }

    /// Drain every event `source` has due at `now`. Returns how many were
    /// handled.
    pub fn pump(&mut self, source: &mut impl InputSource, now: Instant) -> usize {
        let elapsed = self.elapsed(now);
        let mut handled = 0;
        while let Some(event) = source.poll_event(elapsed) {
            log::trace!("event {}", event.kind());
            if let Err(e) = self.handle_event(event, now) {
                log::debug!("continuing after {e}");
            }
            handled += 1;
        }
        handled
    }

    /// Loader progress callback.
    pub fn on_asset_progress(&mut self, loaded: u64, total: u64) {
        self.asset.on_progress(loaded, total);
    }

    /// Loader success callback. Starts the swoop toward the subject;
    /// returns whether it started.
    pub fn on_asset_loaded(&mut self, anchor: Vec3, now: Instant) -> bool {
        let anchor = self.asset.on_loaded(anchor);
        self.motion.begin_swoop(&self.camera, anchor, now)
    }

    /// Loader failure callback. The camera keeps its opening pose.
    pub fn on_asset_failed(&mut self, reason: &str) -> VantageError {
        self.asset.on_failed(reason)
    }

    /// Page scroll callback.
    pub fn on_scroll(&mut self, offset: f32) {
        let _ = self.motion.on_scroll(offset);
    }

    /// Pointer-move callback, in viewport pixels.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.motion.on_pointer_move(Vec2::new(x, y));
    }

    /// Viewport resize callback.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.motion
            .on_resize(&mut self.camera, Vec2::new(width, height));
    }

    // ── Per-frame tick ───────────────────────────────────────────────────

    /// Advance the camera for a frame rendered at `now`.
    pub fn frame(&mut self, now: Instant) -> FrameOutcome {
        let dt = self.timing.tick(now);
        let outcome = self.motion.frame(&mut self.camera, now, dt);
        if outcome.moved_camera() {
            self.panel.refresh_camera(self.camera.eye.into());
        }
        outcome
    }

    // ── Panel edits ──────────────────────────────────────────────────────

    /// Camera slider moved. Ignored while the swoop owns the camera; after
    /// hand-off the compositor eases back toward its target from here.
    pub fn set_camera_eye(&mut self, eye: Vec3) -> bool {
        if self.motion.phase() == MotionPhase::Swooping {
            log::debug!("camera edit ignored during swoop");
            return false;
        }
        self.camera.eye = eye;
        true
    }

    /// Swap the attached panel, returning the old one. The new panel is
    /// immediately told where the camera is.
    pub fn replace_panel(&mut self, mut panel: P) -> P {
        panel.refresh_camera(self.camera.eye.into());
        std::mem::replace(&mut self.panel, panel)
    }

    /// Sky elevation/azimuth sliders moved.
    pub fn set_sun(&mut self, elevation_deg: f32, azimuth_deg: f32) {
        self.environment.set_sun(elevation_deg, azimuth_deg);
    }

    /// Mutable environment, for the water and light sliders.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Camera pose for the renderer.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Motion state.
    #[must_use]
    pub fn motion(&self) -> &CameraMotionState {
        &self.motion
    }

    /// Options the session was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Subject model load status.
    #[must_use]
    pub fn asset_status(&self) -> &AssetStatus {
        self.asset.status()
    }

    /// Sky, water and light parameters.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Attached panel.
    #[must_use]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Attached panel, mutably. Hosts use this to collect deferred
    /// readouts.
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Smoothed frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}
