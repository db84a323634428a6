//! Geometric primitives, described in their own object space.
//!
//! These types only hold shape data plus whatever is cheap to precompute at
//! construction (plane constants, triangle normals, box faces). The ray
//! solvers live in `raylet_renderer::intersect`.

use raylet_math::{Interval, Vec2, Vec3};

/// An infinite plane through `point` with normal `normal`.
///
/// Stored in implicit form `dot(N, P) = D` with `D` derived from the anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Create a plane containing `point` with the given normal.
    ///
    /// The normal is used as given; it is not normalized.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal,
            d: normal.dot(point),
        }
    }

    /// Anchor point the plane was built from.
    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Implicit-form constant `D`.
    pub fn d(&self) -> f32 {
        self.d
    }
}

/// A plane bounded on its local x and y axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    plane: Plane,
    x: Interval,
    y: Interval,
}

impl Rectangle {
    /// Create a rectangle from a plane and two opposite corners on the local xy axes.
    pub fn new(point: Vec3, normal: Vec3, a: Vec2, b: Vec2) -> Self {
        Self {
            plane: Plane::new(point, normal),
            x: Interval::from_unordered(a.x, b.x),
            y: Interval::from_unordered(a.y, b.y),
        }
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Extent on the local x axis, checked as `[min, max)`.
    pub fn x_extent(&self) -> Interval {
        self.x
    }

    /// Extent on the local y axis, checked as `[min, max)`.
    pub fn y_extent(&self) -> Interval {
        self.y
    }
}

/// A sphere centered at its local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// A triangle given by three local-space vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Flat face normal, `normalize(cross(b - a, c - a))`
    normal: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self { a, b, c, normal }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// An axis-aligned box made of six planar faces.
///
/// Face order is front (-Z), back (+Z), left (-X), right (+X), top (+Y), bottom (-Y).
/// All face normals point outward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    min: Vec3,
    max: Vec3,
    faces: [Plane; 6],
}

impl Cuboid {
    /// Create a box from any two opposite corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);

        let faces = [
            Plane::new(min, Vec3::NEG_Z),
            Plane::new(max, Vec3::Z),
            Plane::new(min, Vec3::NEG_X),
            Plane::new(max, Vec3::X),
            Plane::new(max, Vec3::Y),
            Plane::new(min, Vec3::NEG_Y),
        ];

        Self { min, max, faces }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn faces(&self) -> &[Plane; 6] {
        &self.faces
    }

    /// Get the extent for a specific axis (0=X, 1=Y, 2=Z).
    pub fn extent(&self, axis: usize) -> Interval {
        Interval::new(self.min[axis], self.max[axis])
    }
}

/// Any primitive a scene node can carry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Plane(Plane),
    Rectangle(Rectangle),
    Sphere(Sphere),
    Triangle(Triangle),
    Cuboid(Cuboid),
}

impl Geometry {
    /// Short name of the primitive kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Plane(_) => "plane",
            Geometry::Rectangle(_) => "rectangle",
            Geometry::Sphere(_) => "sphere",
            Geometry::Triangle(_) => "triangle",
            Geometry::Cuboid(_) => "box",
        }
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}

impl From<Rectangle> for Geometry {
    fn from(rectangle: Rectangle) -> Self {
        Geometry::Rectangle(rectangle)
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Triangle> for Geometry {
    fn from(triangle: Triangle) -> Self {
        Geometry::Triangle(triangle)
    }
}

impl From<Cuboid> for Geometry {
    fn from(cuboid: Cuboid) -> Self {
        Geometry::Cuboid(cuboid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_constant_contains_anchor() {
        let plane = Plane::new(Vec3::new(0.0, -30.0, 0.0), Vec3::Y);
        assert_eq!(plane.d(), -30.0);
        assert_eq!(plane.normal().dot(plane.point()), plane.d());
    }

    #[test]
    fn test_rectangle_orders_extents() {
        let rect = Rectangle::new(Vec3::ZERO, Vec3::Z, Vec2::new(2.0, -1.0), Vec2::new(-2.0, 1.0));
        assert_eq!(rect.x_extent(), Interval::new(-2.0, 2.0));
        assert_eq!(rect.y_extent(), Interval::new(-1.0, 1.0));
    }

    #[test]
    fn test_sphere_negative_radius() {
        assert_eq!(Sphere::new(-3.0).radius(), 0.0);
    }

    #[test]
    fn test_triangle_normal() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((tri.normal() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_cuboid_faces_from_any_corners() {
        let cuboid = Cuboid::new(Vec3::new(1.0, -1.0, 3.0), Vec3::new(-1.0, 1.0, 1.0));
        assert_eq!(cuboid.min(), Vec3::new(-1.0, -1.0, 1.0));
        assert_eq!(cuboid.max(), Vec3::new(1.0, 1.0, 3.0));

        let faces = cuboid.faces();
        // Front face sits on z = 1 and faces -Z
        assert_eq!(faces[0].normal(), Vec3::NEG_Z);
        assert_eq!(faces[0].d(), -1.0);
        // Right face sits on x = 1 and faces +X
        assert_eq!(faces[3].normal(), Vec3::X);
        assert_eq!(faces[3].d(), 1.0);

        assert_eq!(cuboid.extent(2), Interval::new(1.0, 3.0));
    }

    #[test]
    fn test_geometry_kind() {
        let geometry: Geometry = Sphere::new(1.0).into();
        assert_eq!(geometry.kind(), "sphere");
        let geometry: Geometry = Cuboid::new(Vec3::ZERO, Vec3::ONE).into();
        assert_eq!(geometry.kind(), "box");
    }
}
