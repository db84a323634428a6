//! Ray type and its bag of candidate intersections.
//!
//! A ray is defined by a world-space origin and direction. Scene traversal
//! appends every candidate hit it finds; shading then reads or discards the
//! closest one.

use raylet_core::NodeId;
use raylet_math::{Mat4, Mat4Ext, Vec3};

/// One candidate hit recorded on a ray.
///
/// Point and normal are kept in the hit object's local frame together with the
/// object-to-world transform needed to lift them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit; `+inf` means "no intersection"
    pub t_distance: f32,
    /// Scene node that was hit
    pub object_id: NodeId,
    /// Hit point in object coordinates
    pub collision_point: Vec3,
    /// Surface normal in object coordinates
    pub collision_normal: Vec3,
    /// Object-to-world transform of the hit node at traversal time
    pub object_to_world: Mat4,
}

impl Intersection {
    /// Sentinel returned when a ray has no intersections.
    pub const NONE: Intersection = Intersection {
        t_distance: f32::INFINITY,
        object_id: NodeId::NONE,
        collision_point: Vec3::ZERO,
        collision_normal: Vec3::ZERO,
        object_to_world: Mat4::IDENTITY,
    };

    /// True for a real hit, false for the sentinel.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t_distance < f32::INFINITY
    }

    /// Hit point in world coordinates (homogeneous divide applied).
    pub fn world_point(&self) -> Vec3 {
        self.object_to_world.lift_point(self.collision_point)
    }

    /// Unit surface normal in world coordinates.
    pub fn world_normal(&self) -> Vec3 {
        self.object_to_world.lift_normal(self.collision_normal)
    }
}

/// A ray with origin, direction, and the intersections found along it.
#[derive(Debug, Clone)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector (not necessarily normalized)
    direction: Vec3,
    /// Candidate hits, in no particular order
    intersections: Vec<Intersection>,
}

impl Ray {
    /// Create a new ray with no intersections.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            intersections: Vec::new(),
        }
    }

    /// Degenerate ray with zero origin and direction. It never hits anything.
    pub fn zero() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Record a candidate hit. No deduplication is done.
    pub fn add_intersection(&mut self, intersection: Intersection) {
        self.intersections.push(intersection);
    }

    /// All recorded hits, in insertion order.
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    fn closest_index(&self) -> Option<usize> {
        self.intersections
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.t_distance.total_cmp(&b.t_distance))
            .map(|(index, _)| index)
    }

    /// The hit with the smallest `t_distance`, or [`Intersection::NONE`] when empty.
    pub fn closest_intersection(&self) -> Intersection {
        self.closest_index()
            .map_or(Intersection::NONE, |index| self.intersections[index])
    }

    /// Remove exactly one hit with the smallest `t_distance`.
    ///
    /// Calling this on a ray without intersections does nothing.
    pub fn discard_closest_intersection(&mut self) {
        if let Some(index) = self.closest_index() {
            self.intersections.swap_remove(index);
        }
    }

    /// Discard the closest hit for as long as it matches `predicate`.
    pub fn discard_closest_while(&mut self, mut predicate: impl FnMut(&Intersection) -> bool) {
        while let Some(index) = self.closest_index() {
            if !predicate(&self.intersections[index]) {
                break;
            }
            self.intersections.swap_remove(index);
        }
    }
}
