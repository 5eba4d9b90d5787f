//! Float-RGB color and the in-memory HDR pixel buffer.

mod color;
mod hdr_image;

pub use color::Color;
pub use hdr_image::HdrImage;
