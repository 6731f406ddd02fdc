use serde::{Deserialize, Serialize};
use crate::math::{Mat4, Vec3};

/// Drawing surface size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut viewport = Self { width: 1, height: 1 };
        viewport.resize(width, height);
        viewport
    }

    /// Zero sizes (minimized window) are clamped to 1 so the aspect stays finite
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective camera settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.01,
            far: 1000.0,
            position: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

/// Camera whose projection follows the viewport aspect
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub params: CameraParams,
    aspect: f32,
}

impl Camera {
    pub fn new(params: CameraParams, viewport: &Viewport) -> Self {
        Self {
            params,
            aspect: viewport.aspect(),
        }
    }

    /// Track a resized viewport
    pub fn update_aspect(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
        log::debug!(
            "Camera aspect {:.3} for {}x{}",
            self.aspect,
            viewport.width(),
            viewport.height()
        );
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.params.position, self.params.target, Vec3::UP)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective(
            self.params.fov_degrees.to_radians(),
            self.aspect,
            self.params.near,
            self.params.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_clamps_zero() {
        let mut viewport = Viewport::new(0, 0);
        assert_eq!((viewport.width(), viewport.height()), (1, 1));
        viewport.resize(1920, 0);
        assert_eq!(viewport.aspect(), 1920.0);
    }

    #[test]
    fn test_camera_follows_resize() {
        let mut viewport = Viewport::new(800, 600);
        let mut camera = Camera::new(CameraParams::default(), &viewport);
        assert_relative_eq!(camera.aspect(), 800.0 / 600.0);

        viewport.resize(1000, 500);
        camera.update_aspect(&viewport);
        assert_relative_eq!(camera.aspect(), 2.0);

        // x scale of the projection is f / aspect
        let f = 1.0 / (75f32.to_radians() / 2.0).tan();
        assert_relative_eq!(camera.projection().data[0], f / 2.0, epsilon = 1e-5);
        assert_relative_eq!(camera.projection().data[5], f, epsilon = 1e-5);
    }

    #[test]
    fn test_view_looks_at_target() {
        let viewport = Viewport::new(100, 100);
        let camera = Camera::new(CameraParams::default(), &viewport);
        let target = camera.view().transform_point(camera.params.target);
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-5);
        assert!(target.z < 0.0);
    }
}
