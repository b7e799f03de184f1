use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sky", inline)]
#[serde(default)]
/// Sky dome parameters, handed to the external sky shader.
pub struct SkyOptions {
    /// Sun elevation above the horizon in degrees.
    #[schemars(title = "Elevation", range(min = 0.0, max = 90.0), extend("step" = 0.1))]
    pub elevation: f32,
    /// Sun azimuth in degrees.
    #[schemars(title = "Azimuth", range(min = -180.0, max = 180.0), extend("step" = 0.1))]
    pub azimuth: f32,
    /// Atmospheric haze.
    #[schemars(skip)]
    pub turbidity: f32,
    /// Rayleigh scattering coefficient.
    #[schemars(skip)]
    pub rayleigh: f32,
    /// Mie scattering coefficient.
    #[schemars(skip)]
    pub mie_coefficient: f32,
    /// Mie scattering directionality.
    #[schemars(skip)]
    pub mie_directional_g: f32,
    /// Uniform scale of the sky dome.
    #[schemars(skip)]
    pub scale: f32,
}

impl Default for SkyOptions {
    fn default() -> Self {
        Self {
            elevation: 2.0,
            azimuth: 90.0,
            turbidity: 10.0,
            rayleigh: 2.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.8,
            scale: 10_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Water", inline)]
#[serde(default)]
/// Water plane parameters, handed to the external water shader.
pub struct WaterOptions {
    /// Normal-map distortion strength.
    #[schemars(title = "distortionScale", range(min = 0.0, max = 8.0), extend("step" = 0.1))]
    pub distortion_scale: f32,
    /// Normal-map tiling size.
    #[schemars(title = "size", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub size: f32,
    /// Height of the water plane.
    #[schemars(skip)]
    pub level: f32,
    /// Side length of the square water plane.
    #[schemars(skip)]
    pub extent: f32,
    /// Linear RGB base color of the water.
    #[schemars(skip)]
    pub water_color: [f32; 3],
    /// Reflection render-target size in pixels.
    #[schemars(skip)]
    pub texture_size: u32,
}

impl Default for WaterOptions {
    fn default() -> Self {
        Self {
            distortion_scale: 1.7,
            size: 12.0,
            level: -1.0,
            extent: 10_000.0,
            // 0x001e0f
            water_color: [0.0, 30.0 / 255.0, 15.0 / 255.0],
            texture_size: 512,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Light", inline)]
#[serde(default)]
/// Scene lights. Only the key light is exposed to the panel.
pub struct LightOptions {
    /// Ambient light intensity.
    #[schemars(skip)]
    pub ambient_intensity: f32,
    /// Fixed fill light position.
    #[schemars(skip)]
    pub fill_position: [f32; 3],
    /// Fill light intensity.
    #[schemars(skip)]
    pub fill_intensity: f32,
    /// Key light position, X.
    #[schemars(title = "Light X", range(min = -50.0, max = 50.0), extend("step" = 0.1))]
    pub key_x: f32,
    /// Key light position, Y. Kept above the water.
    #[schemars(title = "Light Y", range(min = 0.0, max = 50.0), extend("step" = 0.1))]
    pub key_y: f32,
    /// Key light position, Z.
    #[schemars(title = "Light Z", range(min = -50.0, max = 50.0), extend("step" = 0.1))]
    pub key_z: f32,
    /// Key light intensity.
    #[schemars(title = "Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.1))]
    pub key_intensity: f32,
    /// ACES filmic tone-mapping exposure.
    #[schemars(skip)]
    pub exposure: f32,
}

impl Default for LightOptions {
    fn default() -> Self {
        Self {
            ambient_intensity: 1.0,
            fill_position: [5.0, 5.0, 5.0],
            fill_intensity: 1.0,
            key_x: 5.0,
            key_y: 7.0,
            key_z: 5.0,
            key_intensity: 1.0,
            exposure: 0.5,
        }
    }
}
