//! Ray-sphere intersection (quadratic equation).

use raylet_core::Sphere;
use raylet_math::Vec3;

use super::SurfaceHit;

/// Intersect a ray with a sphere centered at the local origin.
///
/// The direction is normalized first, so `t` is a local distance. Returns no
/// hit for a negative discriminant, a single hit when the ray is tangent
/// (discriminant exactly zero), and otherwise both the `+sqrt` and `-sqrt`
/// roots, in that order. Roots behind the origin are kept.
pub fn intersect_sphere(origin: Vec3, direction: Vec3, sphere: &Sphere) -> Vec<SurfaceHit> {
    let v = direction.normalize_or_zero();

    // Quadratic: |origin + t*v|^2 = r^2
    let a = v.dot(v);
    if a == 0.0 {
        return Vec::new();
    }
    let b = 2.0 * v.dot(origin);
    let c = origin.dot(origin) - sphere.radius() * sphere.radius();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    if discriminant == 0.0 {
        let t = -b / (2.0 * a);
        return vec![hit_at(origin, v, t)];
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b + sqrt_disc) / (2.0 * a);
    let t2 = (-b - sqrt_disc) / (2.0 * a);

    vec![hit_at(origin, v, t1), hit_at(origin, v, t2)]
}

fn hit_at(origin: Vec3, v: Vec3, t: f32) -> SurfaceHit {
    let point = origin + t * v;
    SurfaceHit {
        t,
        point,
        // Center is the local origin
        normal: point.normalize_or_zero(),
    }
}
