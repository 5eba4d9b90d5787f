use crate::camera::Ray;
use crate::color::Color;
use crate::material::{BrdfEval, Material, PigmentEval};
use crate::world::World;

/// Ignores lighting entirely: returns the hit surface's own pigment plus any
/// emitted radiance, or the background color on a miss. Useful for quickly
/// checking pigment/material wiring without running a full light transport
/// simulation.
pub struct FlatTracer<'a> {
    pub world: &'a World,
    pub background: Color,
}

impl<'a> FlatTracer<'a> {
    pub fn new(world: &'a World, background: Color) -> Self {
        Self { world, background }
    }

    pub fn radiance(&self, ray: &Ray, materials: &[Material]) -> Color {
        let Some(hit) = self.world.ray_intersection(ray) else {
            return self.background;
        };
        let material = &materials[hit.material];
        material.brdf.pigment().eval(hit.surface_point) + material.emitted_radiance.eval(hit.surface_point)
    }
}
