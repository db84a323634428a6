//! Constants the recursive shading pipeline reads from the scene.

use serde::{Deserialize, Serialize};

use crate::Color;

/// Shading parameters shared by every shading call on a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingModel {
    /// Depth at which shading stops and returns black
    pub recursion_limit: u32,
    /// Color used when a secondary ray escapes the scene
    pub background: Color,
    /// Offset applied to secondary ray origins to avoid re-hitting the surface
    pub epsilon: f32,
}

impl Default for ShadingModel {
    fn default() -> Self {
        let off_white = 200.0 / 256.0;
        Self {
            recursion_limit: 5,
            background: Color::splat(off_white),
            epsilon: 1e-3,
        }
    }
}

impl ShadingModel {
    pub fn with_recursion_limit(mut self, recursion_limit: u32) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = ShadingModel::default();
        assert_eq!(model.recursion_limit, 5);
        assert!((model.background.x - 0.78125).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let model: ShadingModel = serde_json::from_str(r#"{ "recursion_limit": 2 }"#).unwrap();
        assert_eq!(model.recursion_limit, 2);
        assert_eq!(model.epsilon, ShadingModel::default().epsilon);
    }
}
