//! Phong-style surface description read by the shading pipeline.

use raylet_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, not clamped)
pub type Color = Vec3;

/// Surface coefficients and colors.
///
/// Coefficients are conceptually in [0, 1] but are never clamped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Material name
    pub name: String,

    /// Ambient coefficient
    pub k_a: f32,

    /// Diffuse (Lambertian) coefficient
    pub k_d: f32,

    /// Specular highlight coefficient
    pub k_s: f32,

    /// Reflective coefficient
    pub k_r: f32,

    /// Transmissive coefficient (0 = opaque, 1 = fully transparent)
    pub k_t: f32,

    pub diffuse_color: Color,

    pub specular_color: Color,

    /// Specular exponent (the highlight uses shininess / 4)
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            k_a: 0.15,
            k_d: 0.85,
            k_s: 0.0,
            k_r: 0.0,
            k_t: 0.0,
            diffuse_color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_color: Color::ONE,
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Create a new material with just a name and diffuse color.
    pub fn new(name: impl Into<String>, diffuse_color: Color) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            ..Default::default()
        }
    }

    /// Set ambient and diffuse coefficients.
    pub fn with_ambient_diffuse(mut self, k_a: f32, k_d: f32) -> Self {
        self.k_a = k_a;
        self.k_d = k_d;
        self
    }

    /// Set the specular highlight.
    pub fn with_specular(mut self, k_s: f32, specular_color: Color, shininess: f32) -> Self {
        self.k_s = k_s;
        self.specular_color = specular_color;
        self.shininess = shininess;
        self
    }

    pub fn with_reflection(mut self, k_r: f32) -> Self {
        self.k_r = k_r;
        self
    }

    pub fn with_transparency(mut self, k_t: f32) -> Self {
        self.k_t = k_t;
        self
    }

    /// Check if this material lets light through.
    pub fn is_transparent(&self) -> bool {
        self.k_t != 0.0
    }

    /// Check if this material reflects the scene.
    pub fn is_reflective(&self) -> bool {
        self.k_r != 0.0
    }
}
