//! Pixel loop and image output.
//!
//! Each pixel gets one primary ray. Hits behind the camera are discarded, a
//! ray that hits nothing keeps the configured fill color, and everything else
//! goes through [`compute_shading`] starting at depth 0.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use raylet_core::{Color, Scene};
use raylet_math::Interval;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::error::{RenderError, RenderResult};
use crate::shading::compute_shading;
use crate::traversal::cast;
use crate::{Camera, Ray};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Edge length of a square render bucket in pixels
    pub bucket_size: u32,
    /// Color of pixels whose primary ray hits nothing
    pub fill_color: Color,
    /// Render buckets on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            fill_color: Color::splat(128.0 / 255.0),
            parallel: true,
        }
    }
}

/// Build the primary ray for a pixel and collect its hits in front of the camera.
pub fn trace_primary(camera: &Camera, scene: &Scene, x: u32, y: u32) -> Ray {
    let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
        return Ray::zero();
    };

    let mut ray = camera.primary_ray(x, y);
    cast(scene, &mut ray);
    ray.discard_closest_while(|hit| hit.t_distance < 0.0);
    ray
}

/// Shade a single pixel. Returns `None` when the primary ray hits nothing.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32) -> Option<Color> {
    let ray = trace_primary(camera, scene, x, y);
    if !ray.closest_intersection().is_hit() {
        return None;
    }
    Some(compute_shading(&ray, scene, 0))
}

/// Convert a linear color to 8-bit RGBA. Channels are clamped to [0, 1].
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b, 255]
}

/// Row-major index of pixel (x, y), computed in `usize`.
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; pixel_index(width, 0, height)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[pixel_index(self.width, x, y)] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the image to disk. The format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let image = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba()).ok_or(
            RenderError::SizeMismatch {
                width: self.width,
                height: self.height,
                pixels: self.pixels.len(),
            },
        )?;
        image.save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer, bucket by bucket.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let width = camera.image_width;
    let height = camera.image_height;
    let buckets = generate_buckets(width, height, config.bucket_size.max(1));

    log::info!(
        "Rendering '{}' at {}x{}: {} objects, {} buckets{}",
        scene.name,
        width,
        height,
        scene.object_count(),
        buckets.len(),
        if config.parallel { " (parallel)" } else { "" }
    );
    if scene.primary_light().is_none() {
        log::warn!("Scene '{}' has no light, shading is ambient only", scene.name);
    }

    let render_one = |bucket: &Bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, scene, config));
    let results: Vec<BucketResult> = if config.parallel {
        buckets.par_iter().map(render_one).collect()
    } else {
        buckets.iter().map(render_one).collect()
    };

    let mut image = ImageBuffer::new(width, height, config.fill_color);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
