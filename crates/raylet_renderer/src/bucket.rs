//! Bucket-based tile rendering.
//!
//! The image is split into square tiles that are traced independently, so
//! they can be handed to rayon without any shared mutable state.

use raylet_core::{Color, Scene};

use crate::renderer::render_pixel;
use crate::{Camera, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile an image into buckets ordered from the center outward.
///
/// Edge buckets are clipped to the image. `bucket_size` must be non-zero.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    for y in (0..height).step_by(bucket_size as usize) {
        for x in (0..width).step_by(bucket_size as usize) {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    sort_center_out(&mut buckets, width, height);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by squared distance of their centers from the image center.
fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let distance = |bucket: &Bucket| {
        let (x, y) = bucket.center();
        (x - cx).powi(2) + (y - cy).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Trace every pixel of a bucket.
///
/// Returns colors in row-major order within the bucket. Pixels that hit
/// nothing get the configured fill color.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, scene: &Scene, config: &RenderConfig) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(camera, scene, bucket.x + local_x, bucket.y + local_y);
            pixels.push(color.unwrap_or(config.fill_color));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(600, 600, 64);
        // 10 columns and rows, the last ones 24 pixels wide
        assert_eq!(buckets.len(), 100);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 600 * 600);
        assert!(buckets.iter().all(|b| b.x + b.width <= 600 && b.y + b.height <= 600));
    }

    #[test]
    fn test_center_out_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);

        assert_eq!((buckets[0].x, buckets[0].y), (64, 64));
        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.index, i);
        }
    }

    #[test]
    fn test_render_bucket_uses_fill_color() {
        let scene = Scene::new("empty");
        let camera = Camera::new().with_resolution(8, 8);
        let config = RenderConfig::default();
        let bucket = Bucket::new(2, 2, 3, 2, 0);

        let pixels = render_bucket(&bucket, &camera, &scene, &config);
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|&p| p == config.fill_color));
    }
}
