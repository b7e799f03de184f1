//! Sky, water and light parameters derived from options.
//!
//! The sky and water shaders live in the host scene graph. This module
//! computes the values they are fed: the sun direction from elevation and
//! azimuth, and the water animation clock.

use glam::Vec3;
use web_time::Instant;

use crate::options::{LightOptions, SkyOptions, WaterOptions};

/// Unit sun direction for an elevation above the horizon and an azimuth,
/// both in degrees. Azimuth 0 points along +Z, 90 along +X.
#[must_use]
pub fn sun_direction(elevation_deg: f32, azimuth_deg: f32) -> Vec3 {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
}

/// Values the host pushes into its sky, water and light objects.
#[derive(Debug, Clone)]
pub struct Environment {
    sky: SkyOptions,
    water: WaterOptions,
    light: LightOptions,
    sun: Vec3,
    epoch: Instant,
}

impl Environment {
    /// Build from options; `epoch` is the zero point of the water clock.
    #[must_use]
    pub fn new(
        sky: &SkyOptions,
        water: &WaterOptions,
        light: &LightOptions,
        epoch: Instant,
    ) -> Self {
        Self {
            sun: sun_direction(sky.elevation, sky.azimuth),
            sky: sky.clone(),
            water: water.clone(),
            light: light.clone(),
            epoch,
        }
    }

    /// Move the sun. Call when the panel's elevation or azimuth changes.
    pub fn set_sun(&mut self, elevation_deg: f32, azimuth_deg: f32) {
        self.sky.elevation = elevation_deg;
        self.sky.azimuth = azimuth_deg;
        self.sun = sun_direction(elevation_deg, azimuth_deg);
        log::debug!("sun direction {}", self.sun);
    }

    /// Water ripple parameters from the panel.
    pub fn set_water(&mut self, distortion_scale: f32, size: f32) {
        self.water.distortion_scale = distortion_scale;
        self.water.size = size;
    }

    /// Key light from the panel. Height is kept above the water plane.
    pub fn set_key_light(&mut self, position: Vec3, intensity: f32) {
        self.light.key_x = position.x;
        self.light.key_y = position.y.max(0.0);
        self.light.key_z = position.z;
        self.light.key_intensity = intensity.max(0.0);
    }

    /// Unit sun direction, shared by the sky and the water reflection.
    #[must_use]
    pub fn sun(&self) -> Vec3 {
        self.sun
    }

    /// Seconds since the epoch, fed to the water `time` uniform.
    #[must_use]
    pub fn water_time(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.epoch).as_secs_f32()
    }

    /// Key light position.
    #[must_use]
    pub fn key_light_position(&self) -> Vec3 {
        Vec3::new(self.light.key_x, self.light.key_y, self.light.key_z)
    }

    /// Current sky parameters.
    #[must_use]
    pub fn sky(&self) -> &SkyOptions {
        &self.sky
    }

    /// Current water parameters.
    #[must_use]
    pub fn water(&self) -> &WaterOptions {
        &self.water
    }

    /// Current light parameters.
    #[must_use]
    pub fn light(&self) -> &LightOptions {
        &self.light
    }
}
