//! Console driver for the pantin scene graph.
//!
//! Stands in for the interactive editor and the GPU renderer: authors the
//! demo figure, mirrors the tree on the scene-ready notification, then runs
//! render frames and prints the draw stream, with editor-style parameter
//! edits in between.

use anyhow::Result;
use pantin_scene::Scene;
use pantin_scene::coords::{ColorRgb, Vec2};
use pantin_scene::graph::{Node, NodeKind};
use pantin_scene::logging;

mod puppet;

fn main() -> Result<()> {
    logging::init_logging(None);

    let mut scene = Scene::new(Node::translate(0.0, 0.0, "root"));
    let shapes = puppet::ShapeCatalog::register(&mut scene);

    // Editor stand-in: mirror the finished tree into the console.
    scene.on_ready(|root| {
        println!("scene ready:");
        print_tree(root, 0);
        println!();
    });

    let figure = puppet::build_figure(&mut scene, &shapes)?;
    scene.notify_ready();
    log::info!("figure authored, {} drawable resources registered", scene.geometries.len());

    println!("frame 1");
    print_frame(&mut scene);

    // Editor-style edits between frames: swing the right arm and repaint the
    // head. The repaint lands on the shared circle resource.
    if let Some(arm) = scene.find_mut(figure.right_arm_swing) {
        arm.set_rotation_degrees(45.0);
    }
    scene.set_color(figure.head, ColorRgb::new(1.0, 0.8, 0.2))?;

    println!();
    println!("frame 2 — right arm swung 45 degrees, head repainted");
    print_frame(&mut scene);

    Ok(())
}

fn print_tree(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if node.geometry().is_some() { " *" } else { "" };
    println!("{indent}{} [{}]{marker}", node.name(), describe(node));
    for child in node.children() {
        print_tree(child, depth + 1);
    }
}

fn describe(node: &Node) -> String {
    match node.kind() {
        NodeKind::Translate => format!(
            "translate {:+.2} {:+.2}",
            node.translation_x().unwrap_or(0.0),
            node.translation_y().unwrap_or(0.0)
        ),
        NodeKind::Rotate => format!("rotate {:.1}", node.rotation_degrees().unwrap_or(0.0)),
        NodeKind::Scale => format!(
            "scale {:.2} {:.2}",
            node.scale_x().unwrap_or(0.0),
            node.scale_y().unwrap_or(0.0)
        ),
    }
}

fn print_frame(scene: &mut Scene) {
    scene.frame();
    for cmd in scene.draw_list.iter() {
        let label = scene.geometries.label(cmd.geometry).unwrap_or("?");
        let origin = cmd.transform.transform_point(Vec2::zero());
        println!(
            "  draw {label:<10} at ({:+.2}, {:+.2})  color ({:.2}, {:.2}, {:.2})",
            origin.x, origin.y, cmd.color.r, cmd.color.g, cmd.color.b
        );
    }
}
