//! Errors raised while building a scene.

use thiserror::Error;

use crate::scene::NodeId;

/// Errors that can occur while building or querying the scene graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Unknown scene node: {0}")]
    UnknownNode(NodeId),

    #[error("Unknown parent node: {0}")]
    UnknownParent(NodeId),

    #[error("Transform of node {0} is not invertible")]
    SingularTransform(NodeId),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
