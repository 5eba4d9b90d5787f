//! Rays, cameras, and the image tracer that drives per-pixel ray generation.

mod camera;
mod image_tracer;
mod ray;

pub use camera::Camera;
pub use image_tracer::ImageTracer;
pub use ray::Ray;
