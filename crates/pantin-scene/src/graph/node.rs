use crate::coords::{ColorRgb, Mat3};
use crate::error::SceneError;
use crate::geometry::GeometryId;

use super::{NodeId, NodeKind, Transform};

/// One element of the scene tree: a local transform, an optional drawable,
/// and the exclusively owned children beneath it.
///
/// A node is created detached and then appended under exactly one parent (or
/// installed as the root). There is no reparent or removal primitive, so the
/// tree stays cycle-free by construction, and dropping a node drops its whole
/// subtree. Child order is insertion order, for both rendering and search.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    transform: Transform,
    geometry: Option<GeometryId>,
    pub(crate) color: ColorRgb,
    children: Vec<Node>,
}

impl Node {
    pub fn new(transform: Transform, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::next(),
            name: name.into(),
            transform,
            geometry: None,
            color: ColorRgb::white(),
            children: Vec::new(),
        }
    }

    /// Shorthand for a `Translate` node — the form scene authoring uses most.
    pub fn translate(dx: f32, dy: f32, name: impl Into<String>) -> Self {
        Self::new(Transform::Translate { dx, dy }, name)
    }

    pub fn rotate(degrees: f32, name: impl Into<String>) -> Self {
        Self::new(Transform::Rotate { degrees }, name)
    }

    pub fn scale(sx: f32, sy: f32, name: impl Into<String>) -> Self {
        Self::new(Transform::Scale { sx, sy }, name)
    }

    // ── identity and state ────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label. Editor-facing only; never used for lookup.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.transform.kind()
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The matrix this node alone contributes (see [`Transform::matrix`]).
    #[inline]
    pub fn local_matrix(&self) -> Mat3 {
        self.transform.matrix()
    }

    #[inline]
    pub fn geometry(&self) -> Option<GeometryId> {
        self.geometry
    }

    /// The tint recorded by the last `Scene::set_color` on this node.
    ///
    /// Note the drawn color comes from the shared geometry resource, which
    /// another node may have overwritten since (last write wins).
    #[inline]
    pub fn color(&self) -> ColorRgb {
        self.color
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    // ── tree mechanics ────────────────────────────────────────────────────

    /// Appends `child` and returns a borrow of it, so call sites can keep
    /// chaining insertions beneath the node they just created.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Records which external geometry this node draws.
    ///
    /// Bindings are write-once: a drawable never silently changes shape.
    pub fn bind_geometry(&mut self, geometry: GeometryId) -> Result<(), SceneError> {
        if self.geometry.is_some() {
            return Err(SceneError::GeometryAlreadyBound(self.id));
        }
        self.geometry = Some(geometry);
        Ok(())
    }

    /// Pre-order depth-first identity search.
    ///
    /// Returns the first node whose id equals `target`, or `None` when the
    /// handle does not belong to this subtree. Matching is by identity only;
    /// two nodes with equal names and parameters are still distinct.
    pub fn find(&self, target: NodeId) -> Option<&Node> {
        if self.id == target {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(target))
    }

    pub fn find_mut(&mut self, target: NodeId) -> Option<&mut Node> {
        if self.id == target {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(target))
    }

    // ── variant parameters ────────────────────────────────────────────────
    //
    // Getters return `None` and setters do nothing when the node is not the
    // matching variant: the editor gates parameter edits on `kind()`, and a
    // missed gate must not take the process down.

    /// X offset of a `Translate` node.
    #[inline]
    pub fn translation_x(&self) -> Option<f32> {
        match self.transform {
            Transform::Translate { dx, .. } => Some(dx),
            _ => None,
        }
    }

    /// Y offset of a `Translate` node.
    #[inline]
    pub fn translation_y(&self) -> Option<f32> {
        match self.transform {
            Transform::Translate { dy, .. } => Some(dy),
            _ => None,
        }
    }

    /// Angle of a `Rotate` node, in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> Option<f32> {
        match self.transform {
            Transform::Rotate { degrees } => Some(degrees),
            _ => None,
        }
    }

    /// X factor of a `Scale` node.
    #[inline]
    pub fn scale_x(&self) -> Option<f32> {
        match self.transform {
            Transform::Scale { sx, .. } => Some(sx),
            _ => None,
        }
    }

    /// Y factor of a `Scale` node.
    #[inline]
    pub fn scale_y(&self) -> Option<f32> {
        match self.transform {
            Transform::Scale { sy, .. } => Some(sy),
            _ => None,
        }
    }

    pub fn set_translation_x(&mut self, v: f32) {
        match &mut self.transform {
            Transform::Translate { dx, .. } => *dx = v,
            _ => self.ignored_set("set_translation_x"),
        }
    }

    pub fn set_translation_y(&mut self, v: f32) {
        match &mut self.transform {
            Transform::Translate { dy, .. } => *dy = v,
            _ => self.ignored_set("set_translation_y"),
        }
    }

    pub fn set_rotation_degrees(&mut self, v: f32) {
        match &mut self.transform {
            Transform::Rotate { degrees } => *degrees = v,
            _ => self.ignored_set("set_rotation_degrees"),
        }
    }

    pub fn set_scale_x(&mut self, v: f32) {
        match &mut self.transform {
            Transform::Scale { sx, .. } => *sx = v,
            _ => self.ignored_set("set_scale_x"),
        }
    }

    pub fn set_scale_y(&mut self, v: f32) {
        match &mut self.transform {
            Transform::Scale { sy, .. } => *sy = v,
            _ => self.ignored_set("set_scale_y"),
        }
    }

    fn ignored_set(&self, setter: &str) {
        log::debug!("{setter} ignored on {} node {:?}", self.kind().label(), self.id);
    }
}
