//! Ray-plane intersection (closed-form).

use raylet_core::Plane;
use raylet_math::Vec3;

use super::SurfaceHit;

/// Intersect a ray with an infinite plane.
///
/// Returns `None` only when the ray is exactly parallel to the plane. Hits
/// behind the origin are returned with a negative `t`; `t` is measured in
/// units of `direction`, which is not normalized here.
pub fn intersect_plane(origin: Vec3, direction: Vec3, plane: &Plane) -> Option<SurfaceHit> {
    let normal = plane.normal();
    let denom = normal.dot(direction);

    // Parallel to the plane (intersection at infinity)
    if denom == 0.0 {
        return None;
    }

    let t = (plane.d() - normal.dot(origin)) / denom;

    Some(SurfaceHit {
        t,
        point: origin + t * direction,
        normal,
    })
}
