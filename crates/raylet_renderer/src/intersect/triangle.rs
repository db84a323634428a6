//! Ray-triangle intersection via Cramer's rule.
//!
//! The ray and the triangle's parametric plane give the linear system
//!
//! ```text
//! origin + t*v = a + beta*(b - a) + gamma*(c - a)
//! ```
//!
//! which is rearranged to `[b-a | c-a | -v] * (beta, gamma, t) = origin - a`
//! and solved with 3x3 determinants.

use raylet_core::Triangle;
use raylet_math::{Mat3, Vec3};

use super::SurfaceHit;

/// Solution of the ray/triangle system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSolution {
    /// Ray parameter along the normalized direction
    pub t: f32,
    /// Barycentric weight of `b - a`
    pub beta: f32,
    /// Barycentric weight of `c - a`
    pub gamma: f32,
}

/// Solve the ray/triangle system.
///
/// Returns `None` when the system determinant is exactly zero (ray parallel
/// to the triangle or degenerate triangle) or when the solution falls outside
/// the triangle. `direction` is normalized before solving.
pub fn solve_triangle(origin: Vec3, direction: Vec3, triangle: &Triangle) -> Option<TriangleSolution> {
    let [a, b, c] = triangle.vertices();
    let v = direction.normalize_or_zero();

    let ab = b - a;
    let ac = c - a;
    let rhs = origin - a;

    let det = Mat3::from_cols(ab, ac, -v).determinant();
    if det == 0.0 {
        return None;
    }

    let beta = Mat3::from_cols(rhs, ac, -v).determinant() / det;
    let gamma = Mat3::from_cols(ab, rhs, -v).determinant() / det;
    let t = Mat3::from_cols(ab, ac, rhs).determinant() / det;

    let unit = 0.0..=1.0;
    if !unit.contains(&beta) || !unit.contains(&gamma) || !unit.contains(&(beta + gamma)) {
        return None;
    }

    Some(TriangleSolution { t, beta, gamma })
}

/// Intersect a ray with a flat-shaded triangle.
///
/// The normal is the triangle's face normal regardless of where it is hit.
pub fn intersect_triangle(origin: Vec3, direction: Vec3, triangle: &Triangle) -> Option<SurfaceHit> {
    let solution = solve_triangle(origin, direction, triangle)?;
    let v = direction.normalize_or_zero();

    Some(SurfaceHit {
        t: solution.t,
        point: origin + solution.t * v,
        normal: triangle.normal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)
    }

    #[test]
    fn test_triangle_hit_inside() {
        let origin = Vec3::new(0.25, 0.25, 1.0);
        let solution = solve_triangle(origin, Vec3::NEG_Z, &unit_triangle()).unwrap();

        assert!(solution.beta >= 0.0 && solution.gamma >= 0.0);
        assert!(solution.beta + solution.gamma <= 1.0);
        assert!((solution.beta - 0.25).abs() < 1e-6);
        assert!((solution.gamma - 0.25).abs() < 1e-6);
        assert!((solution.t - 1.0).abs() < 1e-6);

        let hit = intersect_triangle(origin, Vec3::NEG_Z, &unit_triangle()).unwrap();
        assert!((hit.point - Vec3::new(0.25, 0.25, 0.0)).length() < 1e-6);
        assert!((hit.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_triangle_miss_outside() {
        // beta and gamma are both in range but their sum is not
        let origin = Vec3::new(0.6, 0.6, 1.0);
        assert!(solve_triangle(origin, Vec3::NEG_Z, &unit_triangle()).is_none());
        assert!(intersect_triangle(origin, Vec3::NEG_Z, &unit_triangle()).is_none());

        assert!(intersect_triangle(Vec3::new(-0.1, 0.5, 1.0), Vec3::NEG_Z, &unit_triangle()).is_none());
    }

    #[test]
    fn test_triangle_parallel() {
        let origin = Vec3::new(0.25, 0.25, 1.0);
        assert!(intersect_triangle(origin, Vec3::X, &unit_triangle()).is_none());
    }

    #[test]
    fn test_triangle_degenerate() {
        let sliver = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
        assert!(intersect_triangle(Vec3::new(0.5, 0.0, 1.0), Vec3::NEG_Z, &sliver).is_none());
    }

    #[test]
    fn test_triangle_normal_is_flat() {
        let tri = Triangle::new(Vec3::new(-10.0, -10.0, 0.0), Vec3::new(0.0, 10.0, 0.0), Vec3::new(10.0, -10.0, 0.0));

        let a = intersect_triangle(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, &tri).unwrap();
        let b = intersect_triangle(Vec3::new(-4.0, -8.0, -5.0), Vec3::Z, &tri).unwrap();

        assert_eq!(a.normal, b.normal);
        assert!((a.normal - Vec3::NEG_Z).length() < 1e-6);
        assert!((a.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_behind_origin() {
        let hit = intersect_triangle(Vec3::new(0.25, 0.25, -2.0), Vec3::NEG_Z, &unit_triangle()).unwrap();
        assert!((hit.t + 2.0).abs() < 1e-6);
    }
}
