use crate::coords::{ColorRgb, Mat3};
use crate::draw::{DrawCmd, DrawList};
use crate::error::SceneError;
use crate::geometry::{GeometryId, GeometryStore};
use crate::graph::{Node, NodeId};

/// Top-level coordinator that owns the tree and its shared resources.
///
/// Owns the root [`Node`], the [`GeometryStore`] the tree's drawables point
/// into, and the [`DrawList`] repopulated by [`frame`](Scene::frame). The
/// renderer and the editor stay outside: the renderer consumes the draw
/// stream, the editor talks in [`NodeId`] handles.
///
/// All entry points run on one thread, driven by discrete external events
/// (frame tick, selection, edit). Nothing here blocks or suspends, so a
/// frame always observes the tree as left by the last completed mutation.
pub struct Scene {
    /// Public so the application can register drawables up front and hand
    /// the registry to its renderer alongside the draw stream.
    pub geometries: GeometryStore,
    /// Draw stream populated by the most recent [`frame`](Scene::frame) call.
    ///
    /// Public so callers can split-borrow it next to `geometries` when
    /// resolving labels or vertex data for the instructions.
    pub draw_list: DrawList,
    root: Node,
    ready_handler: Option<Box<dyn FnOnce(&Node)>>,
}

impl Scene {
    /// Creates a scene around an authored root node.
    pub fn new(root: Node) -> Self {
        Self {
            geometries: GeometryStore::new(),
            draw_list: DrawList::new(),
            root,
            ready_handler: None,
        }
    }

    // ── tree access ───────────────────────────────────────────────────────

    /// The unique entry point of the tree. Non-owning.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.root.id()
    }

    /// Locates a node by identity (pre-order depth-first, first match).
    ///
    /// `None` means the handle belongs to no node in this tree — a normal
    /// outcome for selections referencing another tree, never an error.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.root.find(id)
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.root.find_mut(id)
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Appends `node` under `parent` and returns the new child's handle.
    ///
    /// Append-new-child is the only topology mutation, so the tree stays a
    /// tree. An unknown parent is reported, never silently dropped.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId, SceneError> {
        let parent = self.find_mut(parent).ok_or(SceneError::NodeNotFound(parent))?;
        Ok(parent.add_child(node).id())
    }

    /// Points `node` at a registered geometry. Write-once per node.
    pub fn attach_geometry(&mut self, node: NodeId, geometry: GeometryId) -> Result<(), SceneError> {
        if !self.geometries.contains(geometry) {
            return Err(SceneError::UnknownGeometry(geometry));
        }
        let node = self.find_mut(node).ok_or(SceneError::NodeNotFound(node))?;
        node.bind_geometry(geometry)
    }

    /// Records `color` on the node and writes it through to the shared
    /// geometry resource.
    ///
    /// Because the tint lives on the resource, every node drawing the same
    /// geometry renders with the last color written here.
    pub fn set_color(&mut self, node: NodeId, color: ColorRgb) -> Result<(), SceneError> {
        let node_ref = self.find_mut(node).ok_or(SceneError::NodeNotFound(node))?;
        let geometry = node_ref.geometry().ok_or(SceneError::NoGeometry(node))?;
        node_ref.color = color;
        self.geometries.set_color(geometry, color)
    }

    // ── ready notification ────────────────────────────────────────────────

    /// Registers the one-shot handler fired by [`notify_ready`](Scene::notify_ready).
    ///
    /// The editor uses this to mirror the finished tree into its display.
    pub fn on_ready(&mut self, handler: impl FnOnce(&Node) + 'static) {
        self.ready_handler = Some(Box::new(handler));
    }

    /// Fires the scene-ready notification with the root node.
    ///
    /// Scene authoring calls this once after initial construction; later
    /// calls do nothing.
    pub fn notify_ready(&mut self) {
        if let Some(handler) = self.ready_handler.take() {
            handler(&self.root);
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Runs the render traversal from the root with the identity matrix and
    /// returns the recorded stream.
    pub fn frame(&mut self) -> &DrawList {
        self.frame_with(Mat3::IDENTITY)
    }

    /// Like [`frame`](Scene::frame) but seeds the accumulator with `view`,
    /// for callers that fold a camera matrix into the walk.
    pub fn frame_with(&mut self, view: Mat3) -> &DrawList {
        self.draw_list.clear();
        render_node(&self.root, view, &self.geometries, &mut self.draw_list);
        &self.draw_list
    }
}

/// Depth-first render traversal.
///
/// Accumulates `acc × local` on the way down, then records the node's own
/// draw *after* its children — post-order, parent after descendants. Nodes
/// without geometry still propagate their transform; they just emit nothing.
fn render_node(node: &Node, acc: Mat3, geometries: &GeometryStore, out: &mut DrawList) {
    let local = acc * node.local_matrix();
    for child in node.children() {
        render_node(child, local, geometries, out);
    }
    let Some(geometry) = node.geometry() else { return };
    match geometries.color(geometry) {
        Some(color) => out.push(DrawCmd { geometry, transform: local, color }),
        None => log::warn!("unknown geometry {geometry:?} on node {:?}, skipping", node.id()),
    }
}
