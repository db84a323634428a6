//! Scene graph types for raylet.
//!
//! The scene is an arena of nodes addressed by [`NodeId`]. Every node owns its
//! children by id and stores only its local-to-parent transform; object-to-world
//! frames are composed top-down on demand, so nothing mutable is shared while
//! rendering.

use std::fmt;
use std::sync::Arc;

use raylet_math::{Mat4, Mat4Ext, Quat, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::geometry::Geometry;
use crate::light::Light;
use crate::material::Material;
use crate::shading_model::ShadingModel;

/// Stable identifier of a node inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node every scene starts with.
    pub const ROOT: NodeId = NodeId(0);

    /// Placeholder id carried by "no intersection" records.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == NodeId::NONE {
            write!(f, "#none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Transform components that can be composed into a matrix.
#[derive(Clone, Debug)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with only translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Set the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Convert to a 4x4 transformation matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A node of the scene graph: optional geometry, its material, and a local frame.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    geometry: Option<Geometry>,
    material: Arc<Material>,
    local_to_parent: Mat4,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(id: NodeId, name: String, geometry: Option<Geometry>, material: Arc<Material>) -> Self {
        Self {
            id,
            name,
            geometry,
            material,
            local_to_parent: Mat4::IDENTITY,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometry carried by this node; groups and the root have none.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn local_to_parent(&self) -> Mat4 {
        self.local_to_parent
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A complete scene: node hierarchy, lights and shading parameters.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name
    pub name: String,

    nodes: Vec<Node>,
    lights: Vec<Arc<dyn Light>>,
    shading_model: ShadingModel,
}

impl Scene {
    /// Create a scene holding only an empty root node.
    pub fn new(name: impl Into<String>) -> Self {
        let root = Node::new(NodeId::ROOT, "root".to_string(), None, Arc::new(Material::default()));
        Self {
            name: name.into(),
            nodes: vec![root],
            lights: Vec::new(),
            shading_model: ShadingModel::default(),
        }
    }

    /// Replace the shading parameters.
    pub fn with_shading_model(mut self, shading_model: ShadingModel) -> Self {
        self.shading_model = shading_model;
        self
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Add a node with geometry and material under `parent` and return its ID.
    pub fn add_object(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        geometry: impl Into<Geometry>,
        material: Material,
    ) -> SceneResult<NodeId> {
        self.insert(parent, name.into(), Some(geometry.into()), Arc::new(material))
    }

    /// Add a node without geometry, used to group children under a shared frame.
    pub fn add_group(&mut self, parent: NodeId, name: impl Into<String>) -> SceneResult<NodeId> {
        self.insert(parent, name.into(), None, Arc::new(Material::default()))
    }

    fn insert(
        &mut self,
        parent: NodeId,
        name: String,
        geometry: Option<Geometry>,
        material: Arc<Material>,
    ) -> SceneResult<NodeId> {
        if self.node(parent).is_none() {
            return Err(SceneError::UnknownParent(parent));
        }

        let id = NodeId(self.nodes.len() as u32);
        let mut node = Node::new(id, name, geometry, material);
        node.parent = Some(parent);

        log::debug!(
            "Added node {} '{}' ({}) under {}",
            id,
            node.name,
            node.geometry.as_ref().map_or("group", Geometry::kind),
            parent
        );

        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Set a node's local-to-parent transform.
    ///
    /// Singular matrices are rejected since the node could never be hit.
    pub fn set_local_to_parent(&mut self, id: NodeId, local_to_parent: Mat4) -> SceneResult<()> {
        if !local_to_parent.is_invertible() {
            return Err(SceneError::SingularTransform(id));
        }
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(SceneError::UnknownNode(id))?;
        node.local_to_parent = local_to_parent;
        Ok(())
    }

    /// Set a node's local-to-parent transform from components.
    pub fn set_transform(&mut self, id: NodeId, transform: &Transform) -> SceneResult<()> {
        self.set_local_to_parent(id, transform.to_matrix())
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a node by ID, failing for unknown ids.
    pub fn node_by_id(&self, id: NodeId) -> SceneResult<&Node> {
        self.node(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Get the material of a node.
    pub fn material(&self, id: NodeId) -> Option<&Material> {
        self.node(id).map(Node::material)
    }

    /// Compose local transforms from the root down to `id`.
    pub fn object_to_world(&self, id: NodeId) -> SceneResult<Mat4> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node_by_id(node_id)?;
            chain.push(node.local_to_parent);
            current = node.parent;
        }

        Ok(chain
            .into_iter()
            .rev()
            .fold(Mat4::IDENTITY, |world, local| world * local))
    }

    /// Inverse of [`Scene::object_to_world`].
    pub fn world_to_object(&self, id: NodeId) -> SceneResult<Mat4> {
        self.object_to_world(id)?
            .try_inverse()
            .ok_or(SceneError::SingularTransform(id))
    }

    /// Add a light. Shading uses the first light added.
    pub fn add_light(&mut self, light: impl Light + 'static) {
        log::debug!("Added light {:?}", light);
        self.lights.push(Arc::new(light));
    }

    pub fn lights(&self) -> &[Arc<dyn Light>] {
        &self.lights
    }

    /// The light used for shading (index 0), if any.
    pub fn primary_light(&self) -> Option<&dyn Light> {
        self.lights.first().map(|light| light.as_ref())
    }

    pub fn shading_model(&self) -> &ShadingModel {
        &self.shading_model
    }

    /// Iterate over every node, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Get total node count, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of nodes that carry geometry.
    pub fn object_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.geometry.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sphere;
    use crate::light::DirectionalLight;
    use crate::Color;

    #[test]
    fn test_scene_creation() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut scene = Scene::new("test");
        let root = scene.root();

        let sphere = scene
            .add_object(root, "sphere", Sphere::new(1.0), Material::default())
            .unwrap();
        let group = scene.add_group(root, "group").unwrap();
        let child = scene
            .add_object(group, "child", Sphere::new(0.5), Material::default())
            .unwrap();

        assert_eq!(scene.node_count(), 4);
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.node(root).unwrap().children(), &[sphere, group]);
        assert_eq!(scene.node(child).unwrap().parent(), Some(group));
    }

    #[test]
    fn test_unknown_parent() {
        let mut scene = Scene::new("test");
        let missing = NodeId(42);
        let err = scene
            .add_object(missing, "orphan", Sphere::new(1.0), Material::default())
            .unwrap_err();
        assert_eq!(err, SceneError::UnknownParent(missing));
        assert!(scene.node_by_id(missing).is_err());
    }

    #[test]
    fn test_object_to_world_composes_hierarchy() {
        let mut scene = Scene::new("test");
        let group = scene.add_group(scene.root(), "group").unwrap();
        let child = scene
            .add_object(group, "child", Sphere::new(1.0), Material::default())
            .unwrap();

        scene
            .set_transform(group, &Transform::from_translation(Vec3::new(0.0, 0.0, 10.0)))
            .unwrap();
        scene
            .set_local_to_parent(child, Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)))
            .unwrap();

        let world = scene.object_to_world(child).unwrap();
        let origin = world.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(1.0, 0.0, 10.0)).length() < 1e-5);

        let back = scene.world_to_object(child).unwrap().transform_point3(origin);
        assert!(back.length() < 1e-5);
    }

    #[test]
    fn test_rotation_applies_before_child_translation() {
        let mut scene = Scene::new("test");
        let group = scene.add_group(scene.root(), "group").unwrap();
        let child = scene.add_group(group, "child").unwrap();

        let rotation = Transform::default().with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        scene.set_transform(group, &rotation).unwrap();
        scene
            .set_local_to_parent(child, Mat4::from_translation(Vec3::X))
            .unwrap();

        let origin = scene.object_to_world(child).unwrap().transform_point3(Vec3::ZERO);
        // +X rotated a quarter turn about Y lands on -Z
        assert!((origin - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_singular_transform_rejected() {
        let mut scene = Scene::new("test");
        let id = scene
            .add_object(scene.root(), "flat", Sphere::new(1.0), Material::default())
            .unwrap();

        let err = scene
            .set_local_to_parent(id, Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)))
            .unwrap_err();
        assert_eq!(err, SceneError::SingularTransform(id));
        assert_eq!(scene.node(id).unwrap().local_to_parent(), Mat4::IDENTITY);
    }

    #[test]
    fn test_primary_light() {
        let mut scene = Scene::new("test");
        assert!(scene.primary_light().is_none());

        scene.add_light(DirectionalLight::new(Vec3::NEG_Y, Color::ONE));
        scene.add_light(DirectionalLight::new(Vec3::X, Color::ZERO));

        assert_eq!(scene.lights().len(), 2);
        let light = scene.primary_light().unwrap();
        assert_eq!(light.base_color(), Color::ONE);
    }

    #[test]
    fn test_transform_to_matrix_is_srt() {
        let transform = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            scale: Vec3::splat(2.0),
        };

        // Scale, then rotate +X onto -Z, then translate
        let point = transform.to_matrix().transform_point3(Vec3::X);
        assert!((point - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-5);
    }
}
