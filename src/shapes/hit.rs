use crate::camera::Ray;
use crate::geometry::{Normal, Point, Vec2d};
use crate::material::MaterialId;

/// The result of a ray hitting a shape. Carries the material index directly
/// rather than a back-reference to the shape, keeping the hot path free of
/// the shape graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub world_point: Point,
    pub normal: Normal,
    pub surface_point: Vec2d,
    pub t: f32,
    pub ray: Ray,
    pub material: MaterialId,
}

impl HitRecord {
    pub fn is_close(&self, other: &Self, epsilon: f32) -> bool {
        self.world_point.is_close(other.world_point, epsilon)
            && self.normal.is_close(other.normal, epsilon)
            && self.surface_point.is_close(other.surface_point, epsilon)
            && (self.t - other.t).abs() < epsilon
    }
}
