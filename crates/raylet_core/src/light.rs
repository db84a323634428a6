//! Light sources.
//!
//! Shading only ever uses the first light of a scene, but the trait keeps the
//! incidence direction per point so lights other than directional ones fit.

use std::fmt::Debug;

use raylet_math::Vec3;

use crate::Color;

/// Trait for lights that can illuminate a shaded point.
pub trait Light: Debug + Send + Sync {
    /// Direction the light travels when it arrives at `point` (world space).
    fn direction_at(&self, point: Vec3) -> Vec3;

    /// Base color of the emitted light.
    fn base_color(&self) -> Color;
}

/// Light arriving from infinitely far away along a constant direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    color: Color,
}

impl DirectionalLight {
    /// Create a directional light. The direction is normalized.
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
        }
    }
}

impl Light for DirectionalLight {
    fn direction_at(&self, _point: Vec3) -> Vec3 {
        self.direction
    }

    fn base_color(&self) -> Color {
        self.color
    }
}

/// Light radiating from a single position.
///
/// Shadow rays toward a point light are not cut off at the light, so
/// geometry beyond the light still occludes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    position: Vec3,
    color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Light for PointLight {
    fn direction_at(&self, point: Vec3) -> Vec3 {
        (point - self.position).normalize_or_zero()
    }

    fn base_color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_light_is_constant() {
        let light = DirectionalLight::new(Vec3::new(0.5, -0.5, 0.5), Color::ONE);
        let a = light.direction_at(Vec3::ZERO);
        let b = light.direction_at(Vec3::new(100.0, -4.0, 7.0));

        assert_eq!(a, b);
        assert!((a.length() - 1.0).abs() < 1e-6);
        assert_eq!(light.base_color(), Color::ONE);
    }

    #[test]
    fn test_point_light_varies_with_point() {
        let light = PointLight::new(Vec3::new(0.0, 10.0, 0.0), Color::new(1.0, 0.9, 0.8));

        let below = light.direction_at(Vec3::ZERO);
        assert!((below - Vec3::NEG_Y).length() < 1e-6);

        let beside = light.direction_at(Vec3::new(10.0, 10.0, 0.0));
        assert!((beside - Vec3::X).length() < 1e-6);
    }
}
