//! Ray-rectangle intersection: a plane hit clipped to the local xy extents.

use raylet_core::Rectangle;
use raylet_math::Vec3;

use super::{intersect_plane, SurfaceHit};

/// Intersect a ray with a bounded plane.
///
/// The hit point must satisfy `min <= x < max` and `min <= y < max`.
pub fn intersect_rectangle(origin: Vec3, direction: Vec3, rectangle: &Rectangle) -> Option<SurfaceHit> {
    let hit = intersect_plane(origin, direction, rectangle.plane())?;

    let inside = rectangle.x_extent().contains_half_open(hit.point.x)
        && rectangle.y_extent().contains_half_open(hit.point.y);

    inside.then_some(hit)
}
