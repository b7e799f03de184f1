use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the opening camera from options and the viewport size.
    #[must_use]
    pub fn from_options(options: &CameraOptions, width: f32, height: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::from_array(options.initial_eye),
            target: Vec3::from_array(options.initial_target),
            up: Vec3::Y,
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.resize(width, height);
        camera
    }

    /// Re-aim the camera at `point` without moving the eye.
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Update the aspect ratio. Degenerate sizes (minimised windows) keep
    /// the previous ratio.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()
        {
            self.aspect = width / height;
        }
    }

    /// Unit vector from the eye toward the target, or -Z when they coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // OpenGL-style [-1,1] depth, matching WebGL scene graphs
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_configured_pose() {
        let camera = Camera::from_options(&CameraOptions::default(), 1600.0, 900.0);
        assert_eq!(camera.eye, Vec3::new(100.0, 88.0, 145.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(camera.fovy, 50.0);
    }

    #[test]
    fn zero_height_keeps_aspect() {
        let mut camera = Camera::from_options(&CameraOptions::default(), 800.0, 800.0);
        camera.resize(800.0, 0.0);
        assert_eq!(camera.aspect, 1.0);
    }

    #[test]
    fn forward_points_at_target() {
        let mut camera = Camera::from_options(&CameraOptions::default(), 1.0, 1.0);
        camera.eye = Vec3::new(0.0, 0.0, 10.0);
        camera.look_at(Vec3::ZERO);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);

        camera.look_at(camera.eye);
        assert_eq!(camera.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let mut camera = Camera::from_options(&CameraOptions::default(), 1.0, 1.0);
        camera.eye = Vec3::new(-5.0, 2.0, 8.0);
        let clip = camera.build_matrix() * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    }
}
