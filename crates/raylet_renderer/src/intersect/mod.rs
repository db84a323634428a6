//! Ray-primitive intersection algorithms.
//!
//! Each primitive has a closed-form solver working on a ray that is already
//! expressed in the primitive's object space. "No hit" is the only failure
//! mode; parallel rays, singular systems and negative discriminants are plain
//! branches.

mod cuboid;
mod plane;
mod rectangle;
mod sphere;
mod triangle;

pub use cuboid::intersect_cuboid;
pub use plane::intersect_plane;
pub use rectangle::intersect_rectangle;
pub use sphere::intersect_sphere;
pub use triangle::{intersect_triangle, solve_triangle, TriangleSolution};

use raylet_core::Geometry;
use raylet_math::{Mat4, Mat4Ext, Vec3};

/// A hit found by a solver, in object coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter along the (local) ray direction
    pub t: f32,
    /// Hit point in object coordinates
    pub point: Vec3,
    /// Surface normal in object coordinates
    pub normal: Vec3,
}

/// Intersect a world-space ray with a primitive owned by a node.
///
/// The origin is always moved into object space. Sphere and triangle also
/// transform the direction; the plane family keeps the world direction, which
/// is only exact for translation-only frames. Hits are returned in the
/// order the solver produced them.
pub fn intersect_geometry(
    geometry: &Geometry,
    world_to_object: &Mat4,
    origin: Vec3,
    direction: Vec3,
) -> Vec<SurfaceHit> {
    let local_origin = world_to_object.transform_point3(origin);

    match geometry {
        Geometry::Plane(plane) => intersect_plane(local_origin, direction, plane)
            .into_iter()
            .collect(),
        Geometry::Rectangle(rectangle) => intersect_rectangle(local_origin, direction, rectangle)
            .into_iter()
            .collect(),
        Geometry::Cuboid(cuboid) => intersect_cuboid(local_origin, direction, cuboid)
            .into_iter()
            .collect(),
        Geometry::Sphere(sphere) => {
            let local_direction = world_to_object.transform_direction(direction);
            intersect_sphere(local_origin, local_direction, sphere)
        }
        Geometry::Triangle(triangle) => {
            let local_direction = world_to_object.transform_direction(direction);
            intersect_triangle(local_origin, local_direction, triangle)
                .into_iter()
                .collect()
        }
    }
}
