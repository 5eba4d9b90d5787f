use crate::camera::Ray;
use crate::geometry::{Normal, Point};
use crate::light::PointLightSource;
use crate::shapes::{HitRecord, Shape, ShapeEval};

/// An insertion-ordered collection of shapes and point lights, queried by
/// the renderers for closest-hit, any-hit, and visibility.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub shapes: Vec<Shape>,
    pub lights: Vec<PointLightSource>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn add_light(&mut self, light: PointLightSource) {
        self.lights.push(light);
    }

    /// The closest intersection across every shape, if any.
    pub fn ray_intersection(&self, ray: &Ray) -> Option<HitRecord> {
        self.shapes
            .iter()
            .filter_map(|s| s.ray_intersection(ray))
            .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap())
    }

    /// Whether the ray hits anything at all; used by [`crate::render::OnOffTracer`]
    /// which only needs a boolean, not the closest hit.
    pub fn on_off_ray_intersection(&self, ray: &Ray) -> bool {
        self.shapes.iter().any(|s| s.quick_ray_intersection(ray))
    }

    /// Returns the vector from `viewer` to `surface` if nothing in the world
    /// occludes that segment, or `None` if the segment originates inside a
    /// shape (`v . n > 0`) or is blocked before reaching `surface`.
    pub fn offset_if_visible(
        &self,
        viewer: Point,
        surface: Point,
        normal: Normal,
    ) -> Option<crate::geometry::Vec3> {
        let v = surface - viewer;
        if normal.dot_vec(v) > 0.0 {
            return None;
        }

        let mut probe = Ray::new(viewer, v);
        probe.tmin = 1e-5;
        probe.tmax = 1.0 - 1e-5;

        for shape in &self.shapes {
            if let Some(hit) = shape.ray_intersection(&probe) {
                if hit.t < 1.0 && !hit.world_point.is_close(surface, 1e-4) {
                    return None;
                }
            }
        }
        Some(v)
    }
}
