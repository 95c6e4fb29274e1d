//! Pantin scene graph — the node data model and traversals behind a
//! hierarchical 2D scene.
//!
//! This crate owns the tree: transform nodes, ownership mechanics, the
//! render traversal that resolves accumulated matrices into a draw stream,
//! and the locate traversal that resolves editor handles back into nodes.
//! The renderer and the editor live outside and talk to it through
//! [`Scene`], [`draw::DrawList`], and opaque handles.

pub mod coords;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod logging;

mod scene;

// Top-level re-exports for the common entry points.
pub use error::SceneError;
pub use scene::Scene;
