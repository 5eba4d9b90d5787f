use crate::geometry::{Point, Transformation, Vec3};

use super::Ray;

/// Observes the scene from `(0,0,0)` looking down `+x` in its own local
/// frame; `transformation` places the camera in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Camera {
    Orthogonal {
        transformation: Transformation,
        aspect_ratio: f32,
    },
    Perspective {
        transformation: Transformation,
        aspect_ratio: f32,
        distance: f32,
    },
}

impl Camera {
    /// Fires a ray through screen coordinates `(u,v) in [0,1]^2`, `(0,0)` at
    /// the top-left of the screen.
    pub fn fire_ray(&self, u: f32, v: f32) -> Ray {
        match *self {
            Camera::Orthogonal {
                aspect_ratio,
                transformation,
            } => {
                let local = Ray::new(
                    Point::new(-1.0, (1.0 - 2.0 * u) * aspect_ratio, -1.0 + 2.0 * v),
                    Vec3::X,
                );
                local.transform(&transformation)
            }
            Camera::Perspective {
                aspect_ratio,
                distance,
                transformation,
            } => {
                let local = Ray::new(
                    Point::new(-distance, 0.0, 0.0),
                    Vec3::new(distance, (1.0 - 2.0 * u) * aspect_ratio, -1.0 + 2.0 * v),
                );
                local.transform(&transformation)
            }
        }
    }

    pub fn transformation(&self) -> Transformation {
        match *self {
            Camera::Orthogonal { transformation, .. } => transformation,
            Camera::Perspective { transformation, .. } => transformation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_camera_fires_corner_rays() {
        let cam = Camera::Orthogonal {
            transformation: Transformation::IDENTITY,
            aspect_ratio: 2.0,
        };
        assert!(cam.fire_ray(0.0, 0.0).at(1.0).is_close(Point::new(0.0, 2.0, -1.0), 1e-5));
        assert!(cam.fire_ray(1.0, 0.0).at(1.0).is_close(Point::new(0.0, -2.0, -1.0), 1e-5));
        assert!(cam.fire_ray(0.0, 1.0).at(1.0).is_close(Point::new(0.0, 2.0, 1.0), 1e-5));
        assert!(cam.fire_ray(1.0, 1.0).at(1.0).is_close(Point::new(0.0, -2.0, 1.0), 1e-5));
    }

    #[test]
    fn perspective_camera_orientation() {
        let cam = Camera::Perspective {
            transformation: Transformation::IDENTITY,
            aspect_ratio: 2.0,
            distance: 1.0,
        };
        assert!(cam.fire_ray(0.0, 0.0).at(1.0).is_close(Point::new(0.0, 2.0, 1.0), 1e-5));
        assert!(cam.fire_ray(1.0, 1.0).at(1.0).is_close(Point::new(0.0, -2.0, -1.0), 1e-5));
    }
}
