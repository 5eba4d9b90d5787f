use log::error;

use crate::camera::Ray;
use crate::color::Color;
use crate::material::{BrdfEval, Material, PigmentEval};
use crate::rng::Pcg;
use crate::world::World;

/// Recursive Monte-Carlo path tracer with Russian-roulette termination.
///
/// The surviving contribution after roulette is divided by `(1 - q)` to keep
/// the estimator unbiased; this is what makes the furnace-test convergence
/// to `Le / (1 - rho)` hold for any `rr_lim`, not only in the limit of
/// `n_rays = 1` and an unboundedly large `max_depth`.
pub struct PathTracer<'a> {
    pub world: &'a World,
    pub n_rays: u32,
    pub rr_lim: u32,
    pub max_depth: u32,
    pub background: Color,
}

impl<'a> PathTracer<'a> {
    pub fn new(world: &'a World, n_rays: u32, rr_lim: u32, max_depth: u32, background: Color) -> Self {
        Self {
            world,
            n_rays,
            rr_lim,
            max_depth,
            background,
        }
    }

    pub fn radiance(&self, ray: &Ray, rng: &mut Pcg, materials: &[Material]) -> Color {
        if ray.depth > self.max_depth {
            return Color::BLACK;
        }

        let Some(hit) = self.world.ray_intersection(ray) else {
            return self.background;
        };
        let material = &materials[hit.material];

        let pigment_color = material.brdf.pigment().eval(hit.surface_point);
        let emitted = material.emitted_radiance.eval(hit.surface_point);
        let lum = pigment_color.r.max(pigment_color.g).max(pigment_color.b);

        let mut roulette_factor = 1.0;
        if ray.depth > self.rr_lim {
            let q = (1.0 - lum).max(0.05);
            if rng.random_float() <= q {
                return emitted;
            }
            roulette_factor = 1.0 / (1.0 - q);
        }

        let mut sampled_sum = Color::BLACK;
        if lum > 0.0 {
            for _ in 0..self.n_rays {
                let scattered = material.brdf.scatter_ray(
                    rng,
                    ray.direction,
                    hit.world_point,
                    hit.normal,
                    ray.depth,
                );
                sampled_sum = sampled_sum + self.radiance(&scattered, rng, materials);
            }
        }
        // Cosine-weighted importance sampling cancels the BRDF's cos/pi
        // factor against the Phong-1 pdf, leaving a plain `pigment_color`
        // weight on the averaged recursive estimate.
        let reflected = pigment_color * (roulette_factor / self.n_rays as f32) * sampled_sum;

        let result = emitted + reflected;
        if result.r.is_nan() || result.g.is_nan() || result.b.is_nan() {
            error!("path tracer produced a NaN radiance sample; replacing with black");
            return Color::BLACK;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Transformation, Vec3};
    use crate::material::{Brdf, Material, Pigment};
    use crate::shapes::{Shape, Sphere};

    #[test]
    fn furnace_test_converges_to_closed_form() {
        let mut rng = Pcg::new(1, 1);
        for _ in 0..20 {
            let rho = rng.random_float() * 0.9;
            let emitted_power = rng.random_float();

            let mut world = World::new();
            world.add_shape(Shape::Sphere(Sphere {
                transformation: Transformation::IDENTITY,
                material: 0,
            }));
            let materials = vec![Material {
                brdf: Brdf::diffuse(Pigment::uniform(Color::new(rho, rho, rho)), 1.0),
                emitted_radiance: Pigment::uniform(Color::new(emitted_power, 0.0, 0.0)),
            }];

            let tracer = PathTracer::new(&world, 1, 200, 200, Color::BLACK);
            let ray = Ray::new(Point::ORIGIN, Vec3::new(1.0, 0.0, 0.0));
            let result = tracer.radiance(&ray, &mut rng, &materials);

            let expected = emitted_power / (1.0 - rho);
            assert!(
                (result.r - expected).abs() < 1e-3,
                "rho={rho} emitted={emitted_power} got={} expected={expected}",
                result.r
            );
        }
    }
}
