use crate::camera::Ray;
use crate::geometry::{Normal, Point, Transformation, Vec2d};
use crate::material::MaterialId;

use super::HitRecord;

/// A unit sphere centered at the origin in its local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub transformation: Transformation,
    pub material: MaterialId,
}

fn sphere_uv(local_point: Point) -> Vec2d {
    let mut u = local_point.y.atan2(local_point.x) / (2.0 * std::f32::consts::PI);
    if u < 0.0 {
        u += 1.0;
    }
    let v = local_point.z.clamp(-1.0, 1.0).acos() / std::f32::consts::PI;
    Vec2d::new(u, v)
}

impl Sphere {
    /// Both roots of `|O + t d|^2 = 1` that fall in `(tmin, tmax)`, ascending.
    fn local_roots(&self, local_ray: &Ray) -> Vec<f32> {
        let o = local_ray.origin.to_vec();
        let d = local_ray.direction;
        let a = d.squared_norm();
        let b = o.dot(d);
        let c = o.squared_norm() - 1.0;
        let reduced_delta = b * b - a * c;
        if reduced_delta <= 0.0 {
            return Vec::new();
        }
        let sqrt_delta = reduced_delta.sqrt();
        let t1 = (-b - sqrt_delta) / a;
        let t2 = (-b + sqrt_delta) / a;
        [t1, t2]
            .into_iter()
            .filter(|t| *t > local_ray.tmin && *t < local_ray.tmax)
            .collect()
    }

    fn hit_at(&self, local_ray: &Ray, world_ray: &Ray, t: f32, material: MaterialId) -> HitRecord {
        let local_point = local_ray.at(t);
        let mut local_normal = Normal::from_vec(local_point.to_vec());
        if local_normal.dot_vec(local_ray.direction) > 0.0 {
            local_normal = -local_normal;
        }
        HitRecord {
            world_point: self.transformation.apply_point(local_point),
            normal: self.transformation.apply_normal(local_normal).normalize(),
            surface_point: sphere_uv(local_point),
            t,
            ray: *world_ray,
            material,
        }
    }

    pub fn ray_intersection(&self, ray: &Ray) -> Option<HitRecord> {
        let local_ray = ray.transform(&self.transformation.inverse());
        let t = self.local_roots(&local_ray).into_iter().next()?;
        Some(self.hit_at(&local_ray, ray, t, self.material))
    }

    pub fn all_intersections(&self, ray: &Ray) -> Vec<HitRecord> {
        let local_ray = ray.transform(&self.transformation.inverse());
        self.local_roots(&local_ray)
            .into_iter()
            .map(|t| self.hit_at(&local_ray, ray, t, self.material))
            .collect()
    }

    pub fn quick_ray_intersection(&self, ray: &Ray) -> bool {
        let local_ray = ray.transform(&self.transformation.inverse());
        !self.local_roots(&local_ray).is_empty()
    }

    pub fn is_point_inside(&self, point: Point) -> bool {
        let local = self.transformation.inverse().apply_point(point);
        local.to_vec().squared_norm() < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    #[test]
    fn surface_coordinates_of_equator_hit() {
        let sphere = Sphere {
            transformation: Transformation::IDENTITY,
            material: 0,
        };
        let ray = Ray::new(Point::new(2.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = sphere.ray_intersection(&ray).unwrap();
        assert!(hit.world_point.is_close(Point::new(1.0, 0.0, 0.0), 1e-5));
        assert!(hit.surface_point.is_close(Vec2d::new(0.0, 0.5), 1e-5));
    }

    #[test]
    fn miss_returns_none() {
        let sphere = Sphere {
            transformation: Transformation::IDENTITY,
            material: 0,
        };
        let ray = Ray::new(Point::new(10.0, 10.0, 10.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(sphere.ray_intersection(&ray).is_none());
    }
}
