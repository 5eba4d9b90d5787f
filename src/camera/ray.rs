use crate::geometry::{Point, Transformation, Vec3};

/// A half-line `origin + t*direction` traced through the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    pub tmin: f32,
    pub tmax: f32,
    pub depth: u32,
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            tmin: 1e-5,
            tmax: f32::INFINITY,
            depth: 0,
        }
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin + self.direction * t
    }

    /// Transforms origin and direction, preserving `tmin`/`tmax`/`depth`.
    pub fn transform(&self, t: &Transformation) -> Ray {
        Ray {
            origin: t.apply_point(self.origin),
            direction: t.apply_vec(self.direction),
            tmin: self.tmin,
            tmax: self.tmax,
            depth: self.depth,
        }
    }

    pub fn is_close(&self, other: &Ray, epsilon: f32) -> bool {
        self.origin.is_close(other.origin, epsilon) && self.direction.is_close(other.direction, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_advances_along_direction() {
        let r = Ray::new(Point::ORIGIN, Vec3::X);
        assert!(r.at(2.0).is_close(Point::new(2.0, 0.0, 0.0), 1e-6));
    }
}
