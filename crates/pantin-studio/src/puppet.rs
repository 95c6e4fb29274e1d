//! Scene authoring for the studio's articulated figure.
//!
//! Builds the demo character: a torso of two trapezoid halves, a circle
//! head, and jointed arms and legs made of rectangle segments, with shoe
//! feet (the left shoe mirrored via a negative x-scale). Every part hangs
//! from a translate → rotate → scale joint so the editor can pose it.

use pantin_scene::Scene;
use pantin_scene::coords::ColorRgb;
use pantin_scene::error::SceneError;
use pantin_scene::geometry::GeometryId;
use pantin_scene::graph::{Node, NodeId};

const ORANGE: ColorRgb = ColorRgb::new(1.0, 0.5, 0.0);
const PLUM: ColorRgb = ColorRgb::new(0.5, 0.2, 0.8);
const GREEN: ColorRgb = ColorRgb::new(0.0, 1.0, 0.0);
const YELLOW: ColorRgb = ColorRgb::new(1.0, 1.0, 0.0);

/// Handles to the drawable resources the figure references.
pub struct ShapeCatalog {
    pub rectangle: GeometryId,
    pub circle: GeometryId,
    pub trapezoid: GeometryId,
    pub shoe: GeometryId,
}

impl ShapeCatalog {
    /// Registers the four primitive drawables with the scene.
    pub fn register(scene: &mut Scene) -> Self {
        Self {
            rectangle: scene.geometries.register("rectangle"),
            circle: scene.geometries.register("circle"),
            trapezoid: scene.geometries.register("trapezoid"),
            shoe: scene.geometries.register("shoe"),
        }
    }
}

/// Node handles the studio edits between frames.
pub struct Figure {
    /// Rotate node of the right arm joint — the swing the demo poses.
    pub right_arm_swing: NodeId,
    /// Drawable head node, used to demo recoloring.
    pub head: NodeId,
}

/// Handles into one translate → rotate → scale joint triple.
struct Joint {
    /// The rotate node, where articulation happens.
    swing: NodeId,
    /// The scale node child parts hang from.
    socket: NodeId,
}

/// Appends the joint triple every articulated part hangs from.
fn joint(scene: &mut Scene, parent: NodeId, name: &str, dx: f32, dy: f32) -> Result<Joint, SceneError> {
    let t = scene.add_child(parent, Node::translate(dx, dy, format!("{name} T")))?;
    let swing = scene.add_child(t, Node::rotate(0.0, format!("{name} R")))?;
    let socket = scene.add_child(swing, Node::scale(1.0, 1.0, format!("{name} S")))?;
    Ok(Joint { swing, socket })
}

/// Builds one drawable panel — swing joint, inner offset, scale, geometry —
/// as a detached subtree via the chaining insertion API. Returns the subtree
/// together with its drawable node's handle.
fn panel(
    name: &str,
    offset: (f32, f32),
    inner: (f32, f32),
    size: (f32, f32),
    geometry: GeometryId,
) -> Result<(Node, NodeId), SceneError> {
    let mut subtree = Node::translate(offset.0, offset.1, format!("{name} T"));
    let drawable = subtree
        .add_child(Node::rotate(0.0, format!("{name} R")))
        .add_child(Node::translate(inner.0, inner.1, format!("{name} inner T")))
        .add_child(Node::scale(size.0, size.1, format!("{name} S")));
    drawable.bind_geometry(geometry)?;
    let id = drawable.id();
    Ok((subtree, id))
}

/// Hangs a finished panel under `parent` and paints it.
fn attach_panel(
    scene: &mut Scene,
    parent: NodeId,
    panel: (Node, NodeId),
    color: ColorRgb,
) -> Result<NodeId, SceneError> {
    let (subtree, drawable) = panel;
    scene.add_child(parent, subtree)?;
    scene.set_color(drawable, color)?;
    Ok(drawable)
}

/// Authors the whole figure under the scene's root.
pub fn build_figure(scene: &mut Scene, shapes: &ShapeCatalog) -> Result<Figure, SceneError> {
    let root = scene.root_id();
    let body = joint(scene, root, "upper body", 0.0, 2.0)?;

    // Right leg: shoe, fore and back segments off one hip joint.
    let right_leg = joint(scene, body.socket, "right leg", 0.5, -2.0)?;
    attach_panel(
        scene,
        right_leg.socket,
        panel("right shoe", (0.55, -3.75), (-0.3, -0.3), (0.6, 0.6), shapes.shoe)?,
        ColorRgb::black(),
    )?;
    attach_panel(
        scene,
        right_leg.socket,
        panel("right fore leg", (0.3, 0.25), (-0.3, -1.0), (0.8, 2.5), shapes.rectangle)?,
        PLUM,
    )?;
    attach_panel(
        scene,
        right_leg.socket,
        panel("right back leg", (0.3, -1.5), (-0.3, -1.0), (0.8, 2.5), shapes.rectangle)?,
        ORANGE,
    )?;

    // Left leg. The shoe mirrors the right one with a negative x-scale.
    let left_leg = joint(scene, body.socket, "left leg", -0.5, -2.0)?;
    attach_panel(
        scene,
        left_leg.socket,
        panel("left fore leg", (0.0, 0.25), (0.0, -1.0), (0.8, 2.5), shapes.rectangle)?,
        PLUM,
    )?;
    attach_panel(
        scene,
        left_leg.socket,
        panel("left shoe", (-0.05, -3.75), (-0.3, -0.3), (-0.6, 0.6), shapes.shoe)?,
        ColorRgb::black(),
    )?;
    attach_panel(
        scene,
        left_leg.socket,
        panel("left back leg", (0.0, -1.5), (0.0, -1.0), (0.8, 2.5), shapes.rectangle)?,
        ORANGE,
    )?;

    // Arms: a long fore segment and a short cross segment each.
    let right_arm = joint(scene, body.socket, "right arm", 0.5, 0.5)?;
    attach_panel(
        scene,
        right_arm.socket,
        panel("right fore arm", (1.5, 0.0), (0.0, -0.5), (0.5, 2.0), shapes.rectangle)?,
        ORANGE,
    )?;
    attach_panel(
        scene,
        right_arm.socket,
        panel("right back arm", (0.25, 0.25), (0.5, 0.0), (2.0, 0.5), shapes.rectangle)?,
        GREEN,
    )?;

    let left_arm = joint(scene, body.socket, "left arm", -1.0, 0.5)?;
    attach_panel(
        scene,
        left_arm.socket,
        panel("left fore arm", (-1.0, 0.0), (0.0, -0.5), (0.5, 2.0), shapes.rectangle)?,
        ORANGE,
    )?;
    attach_panel(
        scene,
        left_arm.socket,
        panel("left back arm", (-0.25, 0.25), (0.0, 0.0), (2.0, 0.5), shapes.rectangle)?,
        GREEN,
    )?;

    // Head: no swing, the circle sits straight on its anchor.
    let head_t = scene.add_child(body.socket, Node::translate(0.0, 1.5, "head T"))?;
    let head = scene.add_child(head_t, Node::scale(1.0, 1.0, "head S"))?;
    scene.attach_geometry(head, shapes.circle)?;
    scene.set_color(head, GREEN)?;

    // Torso: a trapezoid below the waist and a flipped, taller one above.
    let hips = joint(scene, body.socket, "lower body", 0.0, -1.5)?;
    scene.attach_geometry(hips.socket, shapes.trapezoid)?;
    scene.set_color(hips.socket, YELLOW)?;

    let chest_r = scene.add_child(body.socket, Node::rotate(180.0, "chest R"))?;
    let chest = scene.add_child(chest_r, Node::scale(1.0, 2.0, "chest S"))?;
    scene.attach_geometry(chest, shapes.trapezoid)?;
    scene.set_color(chest, YELLOW)?;

    Ok(Figure { right_arm_swing: right_arm.swing, head })
}
