use crate::camera::Ray;
use crate::geometry::{Normal, Point, Transformation, Vec2d};
use crate::material::MaterialId;

use super::HitRecord;

/// The xy-plane in its local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub transformation: Transformation,
    pub material: MaterialId,
}

impl Plane {
    fn local_root(&self, local_ray: &Ray) -> Option<f32> {
        if local_ray.direction.z.abs() < 1e-8 {
            return None;
        }
        let t = -local_ray.origin.z / local_ray.direction.z;
        if t > local_ray.tmin && t < local_ray.tmax {
            Some(t)
        } else {
            None
        }
    }

    fn hit_at(&self, local_ray: &Ray, world_ray: &Ray, t: f32) -> HitRecord {
        let local_point = local_ray.at(t);
        let mut local_normal = Normal::new(0.0, 0.0, 1.0);
        if local_ray.direction.z > 0.0 {
            local_normal = -local_normal;
        }
        let uv = Vec2d::new(
            local_point.x - local_point.x.floor(),
            local_point.y - local_point.y.floor(),
        );
        HitRecord {
            world_point: self.transformation.apply_point(local_point),
            normal: self.transformation.apply_normal(local_normal).normalize(),
            surface_point: uv,
            t,
            ray: *world_ray,
            material: self.material,
        }
    }

    pub fn ray_intersection(&self, ray: &Ray) -> Option<HitRecord> {
        let local_ray = ray.transform(&self.transformation.inverse());
        let t = self.local_root(&local_ray)?;
        Some(self.hit_at(&local_ray, ray, t))
    }

    pub fn all_intersections(&self, ray: &Ray) -> Vec<HitRecord> {
        let local_ray = ray.transform(&self.transformation.inverse());
        self.local_root(&local_ray)
            .into_iter()
            .map(|t| self.hit_at(&local_ray, ray, t))
            .collect()
    }

    pub fn quick_ray_intersection(&self, ray: &Ray) -> bool {
        let local_ray = ray.transform(&self.transformation.inverse());
        self.local_root(&local_ray).is_some()
    }

    pub fn is_point_inside(&self, point: Point) -> bool {
        let local = self.transformation.inverse().apply_point(point);
        local.z < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    #[test]
    fn ray_along_plane_misses() {
        let plane = Plane {
            transformation: Transformation::IDENTITY,
            material: 0,
        };
        let ray = Ray::new(Point::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(plane.ray_intersection(&ray).is_none());
    }

    #[test]
    fn perpendicular_ray_hits_at_expected_t() {
        let plane = Plane {
            transformation: Transformation::IDENTITY,
            material: 0,
        };
        let ray = Ray::new(Point::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = plane.ray_intersection(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
    }
}
