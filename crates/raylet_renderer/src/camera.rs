//! Pinhole camera defined by a near-plane window.

use raylet_math::{Mat4, Mat4Ext, Vec3};
use serde::{Deserialize, Serialize};

use crate::Ray;

/// Camera for generating primary rays into the scene.
///
/// In its own frame the camera sits at the origin looking down `+Z`. Pixel
/// `(0, 0)` maps to the `(left, top)` corner of the window on the near plane,
/// rows grow toward `bottom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Near-plane window
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub near: f32,
    /// Far plane distance, kept for hosts; rays are not clipped against it
    pub far: f32,

    /// Camera frame in world space
    pub object_to_world: Mat4,
}

impl Camera {
    /// Create a 600x600 camera with a 2x2 window at distance 1.
    pub fn new() -> Self {
        Self {
            image_width: 600,
            image_height: 600,
            top: 1.0,
            bottom: -1.0,
            left: -1.0,
            right: 1.0,
            near: 1.0,
            far: 1000.0,
            object_to_world: Mat4::IDENTITY,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the near-plane window.
    pub fn with_window(mut self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.top = top;
        self.bottom = bottom;
        self.left = left;
        self.right = right;
        self
    }

    /// Set near and far plane distances.
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Place the camera in the world.
    pub fn with_transform(mut self, object_to_world: Mat4) -> Self {
        self.object_to_world = object_to_world;
        self
    }

    /// Returns true if `(x, y)` is a pixel of the image.
    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.image_width as i64 && (y as i64) < self.image_height as i64
    }

    /// Generate the world-space ray through pixel `(x, y)`.
    ///
    /// Pixels outside the image produce [`Ray::zero`], which hits nothing.
    pub fn primary_ray(&self, x: i32, y: i32) -> Ray {
        if !self.contains_pixel(x, y) {
            return Ray::zero();
        }

        let window_width = self.right - self.left;
        let window_height = self.bottom - self.top;
        let u = x as f32 / self.image_width as f32;
        let v = y as f32 / self.image_height as f32;

        let top_left = Vec3::new(self.left, self.top, self.near);
        let pixel = top_left + Vec3::new(window_width * u, window_height * v, 0.0);
        let direction = pixel.normalize_or_zero();

        let origin = self.object_to_world.transform_point3(Vec3::ZERO);
        Ray::new(origin, self.object_to_world.transform_direction(direction))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
