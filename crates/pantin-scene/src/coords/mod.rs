//! Math types shared by the scene graph and its external renderer.
//!
//! Canonical scene space:
//! - Dimensionless scene units (the studio figure lives in roughly −5..5)
//! - Origin at the scene center
//! - +X right, +Y up, positive rotation counter-clockwise
//!
//! Renderers fold their own view/projection on top; the traversal only ever
//! composes 3×3 homogeneous matrices in this space.

mod color;
mod mat3;
mod vec2;

pub use color::ColorRgb;
pub use mat3::Mat3;
pub use vec2::Vec2;
