use crate::camera::Ray;
use crate::color::Color;
use crate::material::Material;
use crate::world::World;

/// Returns `foreground` if the ray hits anything, `background` otherwise.
/// The cheapest possible renderer; useful for silhouette previews.
pub struct OnOffTracer<'a> {
    pub world: &'a World,
    pub background: Color,
    pub foreground: Color,
}

impl<'a> OnOffTracer<'a> {
    pub fn new(world: &'a World, background: Color) -> Self {
        Self {
            world,
            background,
            foreground: Color::WHITE,
        }
    }

    pub fn radiance(&self, ray: &Ray, _materials: &[Material]) -> Color {
        if self.world.on_off_ray_intersection(ray) {
            self.foreground
        } else {
            self.background
        }
    }
}
