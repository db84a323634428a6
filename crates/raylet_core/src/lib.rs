//! raylet core - scene description for the recursive ray tracer.
//!
//! This crate provides:
//!
//! - **Scene graph**: `Scene`, `Node`, `NodeId`, `Transform`
//! - **Primitives**: `Plane`, `Rectangle`, `Sphere`, `Triangle`, `Cuboid`
//! - **Surfaces and lights**: `Material`, `Light`, `DirectionalLight`, `PointLight`
//! - **Shading parameters**: `ShadingModel`
//!
//! # Example
//!
//! ```
//! use raylet_core::{DirectionalLight, Material, Scene, Sphere, Transform};
//! use raylet_math::Vec3;
//!
//! let mut scene = Scene::new("demo");
//! let sphere = scene
//!     .add_object(scene.root(), "ball", Sphere::new(20.0), Material::default())
//!     .unwrap();
//! scene
//!     .set_transform(sphere, &Transform::from_translation(Vec3::new(0.0, 0.0, 70.0)))
//!     .unwrap();
//! scene.add_light(DirectionalLight::new(Vec3::new(0.5, -0.5, 0.5), Vec3::ONE));
//! assert_eq!(scene.object_count(), 1);
//! ```

pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;
pub mod shading_model;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use geometry::{Cuboid, Geometry, Plane, Rectangle, Sphere, Triangle};
pub use light::{DirectionalLight, Light, PointLight};
pub use material::{Color, Material};
pub use scene::{Node, NodeId, Scene, Transform};
pub use shading_model::ShadingModel;
