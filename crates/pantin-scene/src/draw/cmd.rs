use crate::coords::{ColorRgb, Mat3};
use crate::geometry::GeometryId;

/// Renderer-agnostic draw instruction: one geometry, fully resolved.
///
/// The transform is the node's effective matrix — the product of every
/// ancestor's local transform and the node's own. The renderer applies it
/// as-is; no further composition happens downstream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCmd {
    pub geometry: GeometryId,
    pub transform: Mat3,
    pub color: ColorRgb,
}
