use crate::coords::Mat3;

/// Which transform variant a node is. Fixed at construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Translate,
    Rotate,
    Scale,
}

impl NodeKind {
    pub const fn label(self) -> &'static str {
        match self {
            NodeKind::Translate => "translate",
            NodeKind::Rotate => "rotate",
            NodeKind::Scale => "scale",
        }
    }
}

/// A node's local transform: the variant tag plus its parameters.
///
/// Parameters are deliberately unvalidated. Zero or negative scale factors
/// are legal (negative scale mirrors an axis), and rotation angles outside
/// [0, 360) wrap naturally in the trigonometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform {
    Translate { dx: f32, dy: f32 },
    Rotate { degrees: f32 },
    Scale { sx: f32, sy: f32 },
}

impl Transform {
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Transform::Translate { .. } => NodeKind::Translate,
            Transform::Rotate { .. } => NodeKind::Rotate,
            Transform::Scale { .. } => NodeKind::Scale,
        }
    }

    /// The 3×3 homogeneous matrix this transform alone contributes.
    ///
    /// Pure function of the current parameters — independent of ancestors and
    /// children. Rotation is stored in degrees and converted to radians here
    /// and nowhere else.
    pub fn matrix(&self) -> Mat3 {
        match *self {
            Transform::Translate { dx, dy } => Mat3::translation(dx, dy),
            Transform::Rotate { degrees } => Mat3::rotation(degrees.to_radians()),
            Transform::Scale { sx, sy } => Mat3::scaling(sx, sy),
        }
    }
}
