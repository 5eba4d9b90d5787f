use std::ops::{Add, Mul, Sub};

use super::Vec3;

/// A position in 3D space. Unlike [`Vec3`], a point has no direction of its
/// own: it translates under a [`super::Transformation`]'s translation part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub fn to_vec(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn is_close(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl Sub for Point {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vec3> for Point {
    type Output = Point;
    fn add(self, rhs: Vec3) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vec3> for Point {
    type Output = Point;
    fn sub(self, rhs: Vec3) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Uniform scale about the origin.
impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scale_scales_every_component() {
        let p = Point::new(1.0, -2.0, 3.0);
        assert!((p * 2.0).is_close(Point::new(2.0, -4.0, 6.0), 1e-6));
        assert!((2.0 * p).is_close(p * 2.0, 1e-6));
    }
}
