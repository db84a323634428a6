//! Scene traversal: collect every candidate hit of a world-space ray.

use raylet_core::{NodeId, Scene};
use raylet_math::{Mat4, Mat4Ext};

use crate::intersect::intersect_geometry;
use crate::{Intersection, Ray};

/// Test `ray` against the subtree rooted at `node_id`.
///
/// `accumulated` is the parent's object-to-world transform. The node's own
/// local transform is composed into it, the ray is moved into the node's
/// object space for its geometry, and every resulting hit is appended to the
/// ray. Children are visited with the composed transform. Nodes whose
/// composed transform cannot be inverted are skipped, but their children are
/// still visited.
pub fn test_collision(scene: &Scene, node_id: NodeId, ray: &mut Ray, accumulated: Mat4) {
    let Some(node) = scene.node(node_id) else {
        return;
    };

    let object_to_world = accumulated * node.local_to_parent();

    if let Some(geometry) = node.geometry() {
        match object_to_world.try_inverse() {
            Some(world_to_object) => {
                let hits = intersect_geometry(geometry, &world_to_object, ray.origin(), ray.direction());
                for hit in hits {
                    ray.add_intersection(Intersection {
                        t_distance: hit.t,
                        object_id: node_id,
                        collision_point: hit.point,
                        collision_normal: hit.normal,
                        object_to_world,
                    });
                }
            }
            None => log::trace!("Skipping node {} ({}): singular transform", node_id, node.name()),
        }
    }

    for &child in node.children() {
        test_collision(scene, child, ray, object_to_world);
    }
}

/// Traverse the whole scene from its root with an identity transform.
pub fn cast(scene: &Scene, ray: &mut Ray) {
    test_collision(scene, scene.root(), ray, Mat4::IDENTITY);
}
