//! A physically-based offline image renderer: Monte-Carlo path tracing over
//! a CSG scene described by a small declarative DSL.
//!
//! The crate is a library only — image file I/O (PFM/PNG), CLI argument
//! parsing and progress-bar rendering are left to the host application; see
//! [`camera::ImageTracer::fire_all_rays`] for the progress-callback seam and
//! [`color::HdrImage`] for the in-memory pixel buffer this crate owns.

pub mod camera;
pub mod color;
pub mod demos;
pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod render;
pub mod rng;
pub mod scene;
pub mod shapes;
pub mod world;
