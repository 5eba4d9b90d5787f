use itertools::iproduct;

use crate::color::{Color, HdrImage};
use crate::rng::Pcg;

use super::{Camera, Ray};

/// Generates one ray per pixel (or several, stratified, when
/// `samples_per_pixel_edge > 1`) and writes the resulting color into an
/// owned [`HdrImage`]. Rendering is single-threaded and column-major: a
/// progress callback fires once per completed column, in order.
pub struct ImageTracer {
    pub image: HdrImage,
    pub camera: Camera,
    pub samples_per_pixel_edge: u32,
}

impl ImageTracer {
    pub fn new(image: HdrImage, camera: Camera) -> Self {
        Self {
            image,
            camera,
            samples_per_pixel_edge: 1,
        }
    }

    /// Maps a pixel plus an intra-pixel offset to a world-space ray.
    pub fn fire_ray(&self, col: usize, row: usize, u_p: f32, v_p: f32) -> Ray {
        let u = (col as f32 + u_p) / self.image.width() as f32;
        let v = 1.0 - (row as f32 + v_p) / self.image.height() as f32;
        self.camera.fire_ray(u, v)
    }

    /// Renders every pixel with `compute_color`, invoking `on_column_done`
    /// after each completed column with `col / width` as progress.
    pub fn fire_all_rays<F, P>(&mut self, rng: &mut Pcg, mut compute_color: F, mut on_column_done: P)
    where
        F: FnMut(Ray) -> Color,
        P: FnMut(f32),
    {
        let width = self.image.width();
        let height = self.image.height();
        let k = self.samples_per_pixel_edge.max(1);

        for col in 0..width {
            for row in 0..height {
                let color = if k == 1 {
                    compute_color(self.fire_ray(col, row, 0.5, 0.5))
                } else {
                    let mut sum = Color::BLACK;
                    for (i, j) in iproduct!(0..k, 0..k) {
                        let jitter = rng.random_vec2d();
                        let u_p = (i as f32 + jitter.u) / k as f32;
                        let v_p = (j as f32 + jitter.v) / k as f32;
                        sum = sum + compute_color(self.fire_ray(col, row, u_p, v_p));
                    }
                    sum * (1.0 / (k * k) as f32)
                };
                self.image.set_pixel(row, col, color);
            }
            on_column_done(col as f32 / width as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Transformation};

    #[test]
    fn image_orientation_matches_pixel_grid() {
        let camera = Camera::Perspective {
            transformation: Transformation::IDENTITY,
            aspect_ratio: 2.0,
            distance: 1.0,
        };
        let tracer = ImageTracer::new(HdrImage::new(4, 2), camera);

        let top_left = tracer.fire_ray(0, 0, 0.0, 0.0);
        assert!(top_left.at(1.0).is_close(Point::new(0.0, 2.0, 1.0), 1e-4));

        let bottom_right = tracer.fire_ray(3, 1, 1.0, 1.0);
        assert!(bottom_right.at(1.0).is_close(Point::new(0.0, -2.0, -1.0), 1e-4));
    }
}
