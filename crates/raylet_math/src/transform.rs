// Transform utilities for Mat4
//
// Extends glam::Mat4 with the object/world frame conversions the tracer needs.
// Points carry an implicit w=1, directions and normals an implicit w=0.

use glam::{Mat4, Vec3, Vec4};

/// Extension trait for Mat4 to move points, directions and normals between frames.
pub trait Mat4Ext {
    /// Transform a direction (w=0). Translation does not affect the result.
    fn transform_direction(&self, direction: Vec3) -> Vec3;

    /// Transform a point as a homogeneous vector and divide by the resulting w.
    ///
    /// Non-affine matrices can leave w != 1, so this is the safe way to bring an
    /// object-space hit point back into world space.
    fn lift_point(&self, point: Vec3) -> Vec3;

    /// Transform a normal (w=0) and renormalize it.
    fn lift_normal(&self, normal: Vec3) -> Vec3;

    /// True when the matrix has a finite, non-zero determinant.
    fn is_invertible(&self) -> bool;

    /// Inverse of the matrix, or `None` when it is singular.
    fn try_inverse(&self) -> Option<Mat4>;
}

impl Mat4Ext for Mat4 {
    fn transform_direction(&self, direction: Vec3) -> Vec3 {
        let v4 = Vec4::new(direction.x, direction.y, direction.z, 0.0);
        let transformed = *self * v4;
        Vec3::new(transformed.x, transformed.y, transformed.z)
    }

    fn lift_point(&self, point: Vec3) -> Vec3 {
        let transformed = *self * point.extend(1.0);
        if transformed.w == 0.0 {
            return transformed.truncate();
        }
        transformed.truncate() / transformed.w
    }

    fn lift_normal(&self, normal: Vec3) -> Vec3 {
        self.transform_direction(normal).normalize_or_zero()
    }

    fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    fn try_inverse(&self) -> Option<Mat4> {
        if self.is_invertible() {
            Some(self.inverse())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_direction_no_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let direction = Vec3::new(1.0, 0.0, 0.0);

        // Translation should NOT affect directions (w=0)
        assert_eq!(mat.transform_direction(direction), direction);
    }

    #[test]
    fn test_transform_direction_rotation() {
        use std::f32::consts::PI;

        // 90 degree rotation around Z axis
        let mat = Mat4::from_rotation_z(PI / 2.0);
        let transformed = mat.transform_direction(Vec3::X);

        assert!((transformed - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_lift_point_translation() {
        let mat = Mat4::from_translation(Vec3::new(0.0, 0.0, 70.0));
        let lifted = mat.lift_point(Vec3::new(0.0, 0.0, -20.0));

        assert!((lifted - Vec3::new(0.0, 0.0, 50.0)).length() < 0.001);
    }

    #[test]
    fn test_lift_point_divides_by_w() {
        // Uniform homogeneous scale: w ends up at 2, the point should be unchanged.
        let mat = Mat4::from_diagonal(Vec4::new(2.0, 2.0, 2.0, 2.0));
        let lifted = mat.lift_point(Vec3::new(1.0, 2.0, 3.0));

        assert!((lifted - Vec3::new(1.0, 2.0, 3.0)).length() < 0.001);
    }

    #[test]
    fn test_lift_normal_is_unit_length() {
        let mat = Mat4::from_scale(Vec3::new(3.0, 3.0, 3.0));
        let normal = mat.lift_normal(Vec3::Y);

        assert!((normal.length() - 1.0).abs() < 0.001);
        assert!((normal - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_try_inverse() {
        let translation = Vec3::new(10.0, 20.0, 30.0);
        let mat = Mat4::from_translation(translation);
        let inv = mat.try_inverse().expect("translation is invertible");

        let point = Vec3::new(1.0, 2.0, 3.0);
        let back = inv.transform_point3(mat.transform_point3(point));
        assert!((back - point).length() < 0.001);

        assert!(Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)).try_inverse().is_none());
    }
}
