//! raylet renderer - recursive Whitted-style CPU ray tracing.
//!
//! One primary ray per pixel; every hit is shaded with ambient, shadowed
//! Lambertian diffuse, transparency, reflection and a specular highlight.
//! Secondary rays are traced against the whole scene again, bounded by the
//! scene's recursion limit.
//!
//! # Example
//!
//! ```
//! use raylet_core::{DirectionalLight, Material, Scene, Sphere, Transform};
//! use raylet_renderer::{render_pixel, Camera, Vec3};
//!
//! let mut scene = Scene::new("demo");
//! let ball = scene
//!     .add_object(scene.root(), "ball", Sphere::new(1.0), Material::default())
//!     .unwrap();
//! scene
//!     .set_transform(ball, &Transform::from_translation(Vec3::new(0.0, 0.0, 5.0)))
//!     .unwrap();
//! scene.add_light(DirectionalLight::new(Vec3::Z, Vec3::ONE));
//!
//! let camera = Camera::new().with_resolution(10, 10);
//! assert!(render_pixel(&camera, &scene, 5, 5).is_some());
//! assert!(render_pixel(&camera, &scene, 0, 0).is_none());
//! ```

mod bucket;
mod camera;
mod error;
pub mod intersect;
mod ray;
mod renderer;
mod shading;
mod traversal;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use ray::{Intersection, Ray};
pub use renderer::{color_to_rgba, render, render_pixel, trace_primary, ImageBuffer, RenderConfig};
pub use shading::compute_shading;
pub use traversal::{cast, test_collision};

/// Re-export common types so hosts only need this crate
pub use raylet_core::{Color, Scene};
pub use raylet_math::{Interval, Mat4, Vec3};
