//! Ray-box intersection built from the six face planes.

use raylet_core::{Cuboid, Plane};
use raylet_math::Vec3;

use super::{intersect_plane, SurfaceHit};

/// Intersect a ray with an axis-aligned box.
///
/// Every face plane is tested. A face hit is kept when the point lies inside
/// the box on the two axes the face normal does not point along; the normal
/// axis itself is not checked, so rounding on the face's own plane cannot
/// reject the hit.
///
/// The kept hit with the smallest `t >= 0` wins (first face on ties). When all
/// kept hits are behind the origin, the one closest to the origin is returned
/// so callers can discard it as a negative-`t` hit.
pub fn intersect_cuboid(origin: Vec3, direction: Vec3, cuboid: &Cuboid) -> Option<SurfaceHit> {
    let mut ahead: Option<SurfaceHit> = None;
    let mut behind: Option<SurfaceHit> = None;

    for face in cuboid.faces() {
        let Some(hit) = intersect_plane(origin, direction, face) else {
            continue;
        };
        if !within_face(cuboid, face, hit.point) {
            continue;
        }

        // Both sides keep the hit closest to the origin
        let best = if hit.t >= 0.0 { &mut ahead } else { &mut behind };
        if best.map_or(true, |current| hit.t.abs() < current.t.abs()) {
            *best = Some(hit);
        }
    }

    ahead.or(behind)
}

fn within_face(cuboid: &Cuboid, face: &Plane, point: Vec3) -> bool {
    let normal = face.normal();
    (0..3).all(|axis| normal[axis] != 0.0 || cuboid.extent(axis).contains(point[axis]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Cuboid {
        Cuboid::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_box_front_face() {
        let hit = intersect_cuboid(Vec3::new(0.2, 0.3, -5.0), Vec3::Z, &unit_box()).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_Z);
        assert!((hit.point - Vec3::new(0.2, 0.3, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_box_side_face() {
        let hit = intersect_cuboid(Vec3::new(5.0, 0.0, 0.5), Vec3::NEG_X, &unit_box()).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::X);
    }

    #[test]
    fn test_box_rejects_hit_outside_face_bounds() {
        // Crosses the front plane at y = 2, above the box
        assert!(intersect_cuboid(Vec3::new(0.0, 2.0, -5.0), Vec3::Z, &unit_box()).is_none());
        // Crosses the top plane at x = 3, beside the box
        assert!(intersect_cuboid(Vec3::new(3.0, 5.0, 0.0), Vec3::NEG_Y, &unit_box()).is_none());
    }

    #[test]
    fn test_box_edge_hit_is_kept() {
        // Exactly on the edge between the front and top faces
        let hit = intersect_cuboid(Vec3::new(0.0, 1.0, -5.0), Vec3::Z, &unit_box());
        assert!(hit.is_some());
    }

    #[test]
    fn test_box_tie_on_edge_keeps_first_face() {
        // Meets the front and top planes at the same point, both at t = 2
        let hit = intersect_cuboid(Vec3::new(0.0, 3.0, -3.0), Vec3::new(0.0, -1.0, 1.0), &unit_box()).unwrap();

        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.point, Vec3::new(0.0, 1.0, -1.0));
        assert_eq!(hit.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_box_nearest_non_negative_face_wins() {
        // Diagonal ray enters through the front face and leaves through the top
        let hit = intersect_cuboid(Vec3::new(0.0, -0.5, -2.0), Vec3::new(0.0, 1.0, 1.0), &unit_box()).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_box_from_inside_reports_exit() {
        let hit = intersect_cuboid(Vec3::ZERO, Vec3::Z, &unit_box()).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_box_behind_origin() {
        let hit = intersect_cuboid(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, &unit_box()).unwrap();

        // Nearest face behind the origin is the back face at z = 1
        assert!((hit.t + 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_box_parallel_miss() {
        assert!(intersect_cuboid(Vec3::new(0.0, 3.0, -5.0), Vec3::Z, &unit_box()).is_none());
    }
}
