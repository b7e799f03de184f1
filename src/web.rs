//! Browser bindings.
//!
//! [`CameraRig`] wraps a [`Session`] for a page that renders with a
//! JavaScript scene graph. It listens to `scroll`, `pointermove` and
//! `resize` on the window itself; the page forwards its model-loader
//! callbacks and calls [`CameraRig::frame`] from its own animation loop,
//! copying the returned pose onto its camera.
//!
//! The panel callback is only ever invoked after the session borrow is
//! released, so it may call back into the rig (a slider `onChange` calling
//! `setCameraEye`, say).

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use glam::Vec3;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::camera::FrameOutcome;
use crate::options::Options;
use crate::session::{CameraReadout, PendingReadout, Session};

static LOGGER: Once = Once::new();

type SharedSession = Rc<RefCell<Session<PendingReadout>>>;

/// Camera rig handle exported to JavaScript.
#[wasm_bindgen]
pub struct CameraRig {
    session: SharedSession,
    /// JavaScript `(x, y, z) => void` told about camera moves.
    panel_callback: RefCell<Option<js_sys::Function>>,
    on_scroll: Closure<dyn FnMut(web_sys::Event)>,
    on_pointer: Closure<dyn FnMut(web_sys::PointerEvent)>,
    on_resize: Closure<dyn FnMut(web_sys::Event)>,
}

#[wasm_bindgen]
impl CameraRig {
    /// Build the rig from optional TOML options and attach the window
    /// listeners.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<CameraRig, JsValue> {
        LOGGER.call_once(|| {
            console_error_panic_hook::set_once();
            if let Err(e) = console_log::init_with_level(log::Level::Info) {
                web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
            }
        });

        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Options::default(),
        };

        let window = window()?;
        let viewport = viewport_size(&window);
        let session: SharedSession = Rc::new(RefCell::new(Session::with_panel(
            options,
            viewport.into(),
            PendingReadout::default(),
            Instant::now(),
        )));

        let on_scroll = {
            let session = Rc::clone(&session);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    let offset = window.scroll_y().unwrap_or(0.0) as f32;
                    session.borrow_mut().on_scroll(offset);
                }
            })
        };
        let on_pointer = {
            let session = Rc::clone(&session);
            Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
                move |evt: web_sys::PointerEvent| {
                    session
                        .borrow_mut()
                        .on_pointer_move(evt.client_x() as f32, evt.client_y() as f32);
                },
            )
        };
        let on_resize = {
            let session = Rc::clone(&session);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    let [w, h] = viewport_size(&window);
                    session.borrow_mut().on_resize(w, h);
                }
            })
        };

        window.add_event_listener_with_callback(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
        )?;
        window.add_event_listener_with_callback(
            "pointermove",
            on_pointer.as_ref().unchecked_ref(),
        )?;
        window.add_event_listener_with_callback(
            "resize",
            on_resize.as_ref().unchecked_ref(),
        )?;

        Ok(Self {
            session,
            panel_callback: RefCell::new(None),
            on_scroll,
            on_pointer,
            on_resize,
        })
    }

    /// Register `(x, y, z) => void`, called whenever the rig moves the
    /// camera so panel sliders can refresh.
    #[wasm_bindgen(js_name = setPanelCallback)]
    pub fn set_panel_callback(&self, callback: js_sys::Function) {
        let _ = self.panel_callback.replace(Some(callback));
        let readout = {
            let mut session = self.session.borrow_mut();
            let _ = session.panel_mut().take();
            CameraReadout::from(session.camera().eye)
        };
        self.call_panel(readout);
    }

    /// Model loader progress callback.
    #[wasm_bindgen(js_name = assetProgress)]
    pub fn asset_progress(&self, loaded: f64, total: f64) {
        self.session
            .borrow_mut()
            .on_asset_progress(loaded.max(0.0) as u64, total.max(0.0) as u64);
    }

    /// Model loader success callback with the model's position.
    #[wasm_bindgen(js_name = assetLoaded)]
    pub fn asset_loaded(&self, x: f32, y: f32, z: f32) -> bool {
        self.session
            .borrow_mut()
            .on_asset_loaded(Vec3::new(x, y, z), Instant::now())
    }

    /// Model loader error callback.
    #[wasm_bindgen(js_name = assetFailed)]
    pub fn asset_failed(&self, reason: &str) {
        let _ = self.session.borrow_mut().on_asset_failed(reason);
    }

    /// Advance one frame. Returns `[eye.x, eye.y, eye.z, target.x,
    /// target.y, target.z]`.
    pub fn frame(&self) -> js_sys::Float32Array {
        let (pose, readout) = {
            let mut session = self.session.borrow_mut();
            let outcome = session.frame(Instant::now());
            if outcome == FrameOutcome::HandedOff {
                log::info!("scroll control active");
            }
            let camera = session.camera();
            let pose = [
                camera.eye.x,
                camera.eye.y,
                camera.eye.z,
                camera.target.x,
                camera.target.y,
                camera.target.z,
            ];
            (pose, session.panel_mut().take())
        };
        if let Some(readout) = readout {
            self.call_panel(readout);
        }
        js_sys::Float32Array::from(&pose[..])
    }

    /// Column-major view-projection matrix of the current pose.
    #[wasm_bindgen(js_name = viewProjection)]
    pub fn view_projection(&self) -> js_sys::Float32Array {
        let matrix = self.session.borrow().camera().build_matrix();
        js_sys::Float32Array::from(&matrix.to_cols_array()[..])
    }

    /// Camera slider edit. Returns `false` while the swoop owns the camera.
    #[wasm_bindgen(js_name = setCameraEye)]
    pub fn set_camera_eye(&self, x: f32, y: f32, z: f32) -> bool {
        self.session.borrow_mut().set_camera_eye(Vec3::new(x, y, z))
    }

    /// Sky slider edit. Returns the new unit sun direction.
    #[wasm_bindgen(js_name = setSun)]
    pub fn set_sun(&self, elevation: f32, azimuth: f32) -> js_sys::Float32Array {
        let mut session = self.session.borrow_mut();
        session.set_sun(elevation, azimuth);
        js_sys::Float32Array::from(&session.environment().sun().to_array()[..])
    }

    /// Seconds for the water shader's `time` uniform.
    #[wasm_bindgen(js_name = waterTime)]
    pub fn water_time(&self) -> f32 {
        self.session.borrow().environment().water_time(Instant::now())
    }

    /// JSON schema describing the panel sliders.
    #[wasm_bindgen(js_name = panelSchema)]
    pub fn panel_schema(&self) -> Result<String, JsValue> {
        serde_json::to_string(&Options::json_schema())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl CameraRig {
    /// Invoke the panel callback. Callers must not hold a session borrow.
    fn call_panel(&self, readout: CameraReadout) {
        let Some(callback) = self.panel_callback.borrow().clone() else {
            return;
        };
        if let Err(e) = callback.call3(
            &JsValue::NULL,
            &JsValue::from_f64(f64::from(readout.x)),
            &JsValue::from_f64(f64::from(readout.y)),
            &JsValue::from_f64(f64::from(readout.z)),
        ) {
            log::warn!("panel refresh callback threw: {e:?}");
        }
    }
}

impl Drop for CameraRig {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.remove_event_listener_with_callback(
            "scroll",
            self.on_scroll.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "pointermove",
            self.on_pointer.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
        );
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn viewport_size(window: &web_sys::Window) -> [f32; 2] {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    [dim(window.inner_width()), dim(window.inner_height())]
}
