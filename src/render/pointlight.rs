use crate::camera::Ray;
use crate::color::Color;
use crate::material::{Brdf, BrdfEval, Material, PigmentEval};
use crate::rng::Pcg;
use crate::world::World;

/// Bounces through mirror (specular) surfaces, then shades the first
/// non-specular hit against every point light in the world plus a constant
/// ambient term.
const MAX_SPECULAR_BOUNCES: u32 = 10;

pub struct PointLightTracer<'a> {
    pub world: &'a World,
    pub ambient: Color,
    pub background: Color,
}

impl<'a> PointLightTracer<'a> {
    pub fn new(world: &'a World, ambient: Color, background: Color) -> Self {
        Self {
            world,
            ambient,
            background,
        }
    }

    pub fn radiance(&self, ray: &Ray, materials: &[Material]) -> Color {
        let mut current = *ray;
        let mut scratch_rng = Pcg::default();

        for _ in 0..MAX_SPECULAR_BOUNCES {
            let Some(hit) = self.world.ray_intersection(&current) else {
                return self.background;
            };
            let material = &materials[hit.material];

            if let Brdf::Specular(specular) = material.brdf {
                current = specular.scatter_ray(
                    &mut scratch_rng,
                    current.direction,
                    hit.world_point,
                    hit.normal,
                    current.depth,
                );
                continue;
            }

            let mut result = self.ambient + material.emitted_radiance.eval(hit.surface_point);
            for light in &self.world.lights {
                let Some(v) = self
                    .world
                    .offset_if_visible(light.position, hit.world_point, hit.normal)
                else {
                    continue;
                };
                let distance = v.norm();
                let dir = v * (-1.0 / distance);
                let cos_theta = hit.normal.dot_vec(dir).max(0.0);
                if cos_theta <= 0.0 {
                    continue;
                }
                let brdf_value = material.brdf.eval(hit.normal, -dir, dir, hit.surface_point);
                let scale = light.attenuation(distance) * cos_theta;
                result = result + (light.color * scale) * brdf_value;
            }
            return result;
        }
        self.background
    }
}
