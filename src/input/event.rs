/// Platform-agnostic input events.
///
/// Browser listeners and the asset loader push these into an
/// [`InputSource`](super::InputSource); the
/// [`Session`](crate::session::Session) drains them before each frame.
///
/// # Example
///
/// ```ignore
/// session.handle_event(InputEvent::Scrolled { offset: 420.0 }, now);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Vertical page scroll offset changed.
    Scrolled {
        /// Absolute scroll offset in CSS pixels.
        offset: f32,
    },
    /// Pointer moved to an absolute viewport position.
    PointerMoved {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Viewport size changed.
    Resized {
        /// New width in CSS pixels.
        width: f32,
        /// New height in CSS pixels.
        height: f32,
    },
    /// Subject model download progress.
    AssetProgress {
        /// Bytes received so far.
        loaded: u64,
        /// Total bytes, or 0 when the server did not say.
        total: u64,
    },
    /// Subject model finished loading.
    AssetLoaded {
        /// World-space point the camera should look at.
        anchor: [f32; 3],
    },
    /// Subject model failed to load.
    AssetFailed {
        /// Loader-provided failure description.
        reason: String,
    },
}

impl InputEvent {
    /// Short name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scrolled { .. } => "scroll",
            Self::PointerMoved { .. } => "pointer",
            Self::Resized { .. } => "resize",
            Self::AssetProgress { .. } => "progress",
            Self::AssetLoaded { .. } => "loaded",
            Self::AssetFailed { .. } => "failed",
        }
    }
}
