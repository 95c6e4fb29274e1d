use std::fmt;

use crate::geometry::GeometryId;
use crate::graph::NodeId;

/// Errors surfaced by scene mutation entry points.
///
/// Traversals never fail on a well-formed tree: a locate miss is a plain
/// `None`, and wrong-variant parameter access is a no-op, not an error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneError {
    /// The referenced node does not live in this tree.
    NodeNotFound(NodeId),
    /// The geometry handle was never registered with the scene.
    UnknownGeometry(GeometryId),
    /// The node already draws a geometry; bindings are write-once.
    GeometryAlreadyBound(NodeId),
    /// Color was set on a node with no geometry bound.
    NoGeometry(NodeId),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::NodeNotFound(id) => write!(f, "node {id:?} not found in tree"),
            SceneError::UnknownGeometry(id) => write!(f, "geometry {id:?} is not registered"),
            SceneError::GeometryAlreadyBound(id) => {
                write!(f, "node {id:?} already has a geometry bound")
            }
            SceneError::NoGeometry(id) => write!(f, "node {id:?} has no geometry to color"),
        }
    }
}

impl std::error::Error for SceneError {}
