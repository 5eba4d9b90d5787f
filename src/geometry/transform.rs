use std::ops::Mul;

use super::{Normal, Point, Vec3};

/// A 3x3 linear map stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Mat3 {
    m: [[f32; 3]; 3],
}

impl Mat3 {
    const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    fn apply_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Applies the transpose of this matrix, used for normal transforms.
    fn apply_vec_transposed(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[1][0] * v.y + self.m[2][0] * v.z,
            self.m[0][1] * v.x + self.m[1][1] * v.y + self.m[2][1] * v.z,
            self.m[0][2] * v.x + self.m[1][2] * v.y + self.m[2][2] * v.z,
        )
    }

    fn compose(&self, other: &Self) -> Self {
        let mut m = [[0.0_f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Self { m }
    }

    fn is_close(&self, other: &Self, epsilon: f32) -> bool {
        (0..3).all(|i| (0..3).all(|j| (self.m[i][j] - other.m[i][j]).abs() < epsilon))
    }
}

/// An affine map composed of a linear part and a translation, with its
/// inverse cached so that repeated inversion (needed by every ray-shape
/// intersection) is O(1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    linear: Mat3,
    translation: Vec3,
    inv_linear: Mat3,
    inv_translation: Vec3,
}

impl Transformation {
    pub const IDENTITY: Self = Self {
        linear: Mat3::IDENTITY,
        translation: Vec3::ZERO,
        inv_linear: Mat3::IDENTITY,
        inv_translation: Vec3::ZERO,
    };

    fn from_linear(linear: Mat3, translation: Vec3, inv_linear: Mat3, inv_translation: Vec3) -> Self {
        Self {
            linear,
            translation,
            inv_linear,
            inv_translation,
        }
    }

    pub fn translation(v: Vec3) -> Self {
        Self::from_linear(Mat3::IDENTITY, v, Mat3::IDENTITY, -v)
    }

    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        let m = Mat3 {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz]],
        };
        let inv = Mat3 {
            m: [
                [1.0 / sx, 0.0, 0.0],
                [0.0, 1.0 / sy, 0.0],
                [0.0, 0.0, 1.0 / sz],
            ],
        };
        Self::from_linear(m, Vec3::ZERO, inv, Vec3::ZERO)
    }

    pub fn rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let m = Mat3 {
            m: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        };
        let inv = Mat3 {
            m: [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]],
        };
        Self::from_linear(m, Vec3::ZERO, inv, Vec3::ZERO)
    }

    pub fn rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let m = Mat3 {
            m: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        };
        let inv = Mat3 {
            m: [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]],
        };
        Self::from_linear(m, Vec3::ZERO, inv, Vec3::ZERO)
    }

    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let m = Mat3 {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        };
        let inv = Mat3 {
            m: [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
        };
        Self::from_linear(m, Vec3::ZERO, inv, Vec3::ZERO)
    }

    /// Swaps the linear/translation halves with their cached inverses; O(1).
    pub fn inverse(&self) -> Self {
        Self {
            linear: self.inv_linear,
            translation: self.inv_translation,
            inv_linear: self.linear,
            inv_translation: self.translation,
        }
    }

    pub fn apply_vec(&self, v: Vec3) -> Vec3 {
        self.linear.apply_vec(v)
    }

    pub fn apply_point(&self, p: Point) -> Point {
        let v = self.linear.apply_vec(p.to_vec()) + self.translation;
        Point::new(v.x, v.y, v.z)
    }

    /// Transforms a normal by the inverse-transpose of the linear part.
    /// Not renormalized; callers normalize when they need a unit normal.
    pub fn apply_normal(&self, n: Normal) -> Normal {
        Normal::from_vec(self.inv_linear.apply_vec_transposed(n.to_vec()))
    }

    pub fn is_consistent(&self, epsilon: f32) -> bool {
        let prod = self.linear.compose(&self.inv_linear);
        prod.is_close(&Mat3::IDENTITY, epsilon)
    }
}

impl Mul for Transformation {
    type Output = Transformation;

    /// Left-to-right composition: `(a * b).apply(p) == a.apply(b.apply(p))`.
    fn mul(self, rhs: Transformation) -> Transformation {
        let linear = self.linear.compose(&rhs.linear);
        let translation = self.linear.apply_vec(rhs.translation) + self.translation;
        let inv_linear = rhs.inv_linear.compose(&self.inv_linear);
        let inv_translation = rhs.inv_linear.apply_vec(self.inv_translation) + rhs.inv_translation;
        Transformation {
            linear,
            translation,
            inv_linear,
            inv_translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_consistent() {
        assert!(Transformation::IDENTITY.is_consistent(1e-5));
    }

    #[test]
    fn translation_round_trips() {
        let t = Transformation::translation(Vec3::new(1.0, 2.0, 3.0));
        let p = Point::new(0.0, 0.0, 0.0);
        let moved = t.apply_point(p);
        let back = t.inverse().apply_point(moved);
        assert!(back.is_close(p, 1e-5));
    }

    #[test]
    fn rotation_y_is_consistent() {
        let t = Transformation::rotation_y(1.234);
        assert!(t.is_consistent(1e-5));
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = Transformation::translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Transformation::rotation_z(std::f32::consts::FRAC_PI_2);
        let combined = a * b;
        let p = Point::new(1.0, 0.0, 0.0);
        assert!(combined.apply_point(p).is_close(a.apply_point(b.apply_point(p)), 1e-5));
        assert!(combined.is_consistent(1e-5));
    }

    #[test]
    fn three_atom_chain_inverts_correctly() {
        // A middle atom with both rotation and translation exercises the
        // cached inv_translation carried through two compositions.
        let a = Transformation::rotation_z(std::f32::consts::FRAC_PI_2);
        let b = Transformation::translation(Vec3::new(1.0, 0.0, 0.0));
        let c = Transformation::translation(Vec3::new(0.0, 0.0, 5.0));
        let combined = a * b * c;

        let p = Point::new(2.0, -1.0, 3.0);
        let moved = combined.apply_point(p);
        let back = combined.inverse().apply_point(moved);
        assert!(back.is_close(p, 1e-5));
        assert!(combined.apply_point(combined.inverse().apply_point(p)).is_close(p, 1e-5));
    }
}
