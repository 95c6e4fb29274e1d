use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// Column-major 3×3 homogeneous matrix for 2D affine transforms.
///
/// `#[repr(C)]` + `Pod` so renderers can upload the matrix as a uniform
/// without conversion; column-major matches the GPU-side convention.
///
/// Composition is standard matrix multiplication: `parent * child` applies
/// `child` first, then `parent`. All arithmetic runs in a fixed scalar order,
/// so identical inputs reproduce identical matrices bit for bit.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    /// Columns, each `[x, y, w]`.
    pub cols: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Translation by `(dx, dy)`.
    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [dx, dy, 1.0]],
        }
    }

    /// Rotation about the origin; positive angles turn +X toward +Y
    /// (counter-clockwise).
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            cols: [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Non-uniform scale. Negative factors mirror the corresponding axis.
    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            cols: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Applies the transform to a point (w = 1).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.cols[0][0] * p.x + self.cols[1][0] * p.y + self.cols[2][0],
            self.cols[0][1] * p.x + self.cols[1][1] * p.y + self.cols[2][1],
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [[0.0f32; 3]; 3];
        for (c, col) in rhs.cols.iter().enumerate() {
            for r in 0..3 {
                out[c][r] = self.cols[0][r] * col[0]
                    + self.cols[1][r] * col[1]
                    + self.cols[2][r] * col[2];
            }
        }
        Mat3 { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn translation_moves_the_origin() {
        let m = Mat3::translation(3.0, -2.0);
        assert_eq!(m.transform_point(Vec2::zero()), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn translation_offsets_any_point() {
        let m = Mat3::translation(1.5, 0.25);
        assert_eq!(m.transform_point(Vec2::new(2.0, 4.0)), Vec2::new(3.5, 4.25));
    }

    #[test]
    fn rotation_quarter_turn_is_counter_clockwise() {
        let m = Mat3::rotation(core::f32::consts::FRAC_PI_2);
        assert!(approx(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotation_zero_is_identity() {
        assert_eq!(Mat3::rotation(0.0), Mat3::IDENTITY);
    }

    #[test]
    fn scaling_stretches_each_axis() {
        let m = Mat3::scaling(2.0, 0.5);
        assert_eq!(m.transform_point(Vec2::new(3.0, 4.0)), Vec2::new(6.0, 2.0));
    }

    #[test]
    fn unit_scale_is_identity() {
        assert_eq!(Mat3::scaling(1.0, 1.0), Mat3::IDENTITY);
    }

    #[test]
    fn negative_scale_mirrors() {
        let m = Mat3::scaling(-1.0, 1.0);
        assert_eq!(m.transform_point(Vec2::new(2.0, 3.0)), Vec2::new(-2.0, 3.0));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = Mat3::translation(1.0, 2.0) * Mat3::rotation(0.7);
        assert_eq!(Mat3::IDENTITY * m, m);
        assert_eq!(m * Mat3::IDENTITY, m);
    }

    #[test]
    fn product_applies_right_factor_first() {
        // Translate ∘ Scale: the point is scaled, then moved.
        let m = Mat3::translation(10.0, 0.0) * Mat3::scaling(2.0, 2.0);
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn multiplication_is_associative() {
        let a = Mat3::translation(1.0, 2.0);
        let b = Mat3::rotation(0.3);
        let c = Mat3::scaling(2.0, 0.5);
        let p = Vec2::new(0.7, -1.1);
        let left = ((a * b) * c).transform_point(p);
        let right = (a * (b * c)).transform_point(p);
        assert!(approx(left, right));
    }
}
