use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters and the pose the page opens with.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Wide establishing position the camera starts at before the swoop.
    #[schemars(skip)]
    pub initial_eye: [f32; 3],
    /// World-space point the camera looks at until the subject loads.
    #[schemars(skip)]
    pub initial_target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 10_000.0,
            initial_eye: [100.0, 88.0, 145.0],
            initial_target: [0.0, 0.0, 0.0],
        }
    }
}
