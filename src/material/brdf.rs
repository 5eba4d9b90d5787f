use enum_dispatch::enum_dispatch;
use std::f32::consts::PI;

use crate::camera::Ray;
use crate::color::Color;
use crate::geometry::{Normal, Point, Vec2d, Vec3};
use crate::rng::Pcg;

use super::pigment::{Pigment, PigmentEval};

#[enum_dispatch]
pub trait BrdfEval {
    fn pigment(&self) -> Pigment;

    fn eval(&self, normal: Normal, in_dir: Vec3, out_dir: Vec3, uv: Vec2d) -> Color;

    fn scatter_ray(&self, rng: &mut Pcg, in_dir: Vec3, origin: Point, normal: Normal, depth: u32) -> Ray;
}

/// Branchless orthonormal-basis construction from a unit z-axis (Duff et al.),
/// used to sample the cosine-weighted hemisphere around a surface normal
/// without a coordinate-singularity at the poles.
fn onb_from_z(n: Vec3) -> (Vec3, Vec3, Vec3) {
    let sign = if n.z >= 0.0 { 1.0 } else { -1.0 };
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;
    let e1 = Vec3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
    let e2 = Vec3::new(b, sign + n.y * n.y * a, -n.y);
    (e1, e2, n)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diffuse {
    pub pigment: Pigment,
    pub reflectance: f32,
}

impl BrdfEval for Diffuse {
    fn pigment(&self) -> Pigment {
        self.pigment
    }

    fn eval(&self, _normal: Normal, _in_dir: Vec3, _out_dir: Vec3, uv: Vec2d) -> Color {
        self.pigment.eval(uv) * (self.reflectance / PI)
    }

    fn scatter_ray(&self, rng: &mut Pcg, _in_dir: Vec3, origin: Point, normal: Normal, depth: u32) -> Ray {
        let (e1, e2, e3) = onb_from_z(normal.to_vec());
        let (theta, phi) = rng.random_phong(1.0);
        let dir = e1 * (phi.cos() * theta.sin()) + e2 * (phi.sin() * theta.sin()) + e3 * theta.cos();
        let mut ray = Ray::new(origin, dir);
        ray.tmin = 1e-3;
        ray.depth = depth + 1;
        ray
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specular {
    pub pigment: Pigment,
}

fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - n * (2.0 * n.dot(d))
}

impl BrdfEval for Specular {
    fn pigment(&self) -> Pigment {
        self.pigment
    }

    fn eval(&self, normal: Normal, in_dir: Vec3, out_dir: Vec3, uv: Vec2d) -> Color {
        let mirror = reflect(in_dir, normal.to_vec());
        if mirror.is_close(out_dir, 1e-3) {
            self.pigment.eval(uv)
        } else {
            Color::BLACK
        }
    }

    fn scatter_ray(&self, _rng: &mut Pcg, in_dir: Vec3, origin: Point, normal: Normal, depth: u32) -> Ray {
        let dir = reflect(in_dir, normal.to_vec());
        let mut ray = Ray::new(origin, dir);
        ray.tmin = 1e-3;
        ray.depth = depth + 1;
        ray
    }
}

#[enum_dispatch(BrdfEval)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brdf {
    Diffuse(Diffuse),
    Specular(Specular),
}

impl Brdf {
    pub fn diffuse(pigment: Pigment, reflectance: f32) -> Self {
        Brdf::Diffuse(Diffuse { pigment, reflectance })
    }

    pub fn specular(pigment: Pigment) -> Self {
        Brdf::Specular(Specular { pigment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn specular_reflects_exactly() {
        let brdf = Brdf::specular(Pigment::uniform(Color::WHITE));
        let normal = Normal::new(0.0, 0.0, 1.0);
        let in_dir = Vec3::new(1.0, 0.0, -1.0);
        let mut rng = Pcg::default();
        let ray = brdf.scatter_ray(&mut rng, in_dir, Point::ORIGIN, normal, 0);
        assert!(ray.direction.is_close(Vec3::new(1.0, 0.0, 1.0), 1e-5));
        assert_eq!(ray.depth, 1);
    }

    #[test]
    fn diffuse_scatter_stays_in_hemisphere() {
        let brdf = Brdf::diffuse(Pigment::uniform(Color::WHITE), 1.0);
        let normal = Normal::new(0.0, 0.0, 1.0);
        let mut rng = Pcg::default();
        for _ in 0..50 {
            let ray = brdf.scatter_ray(&mut rng, Vec3::ZERO, Point::ORIGIN, normal, 0);
            assert!(ray.direction.z >= -1e-5);
        }
    }
}
