use crate::color::Color;

use super::brdf::Brdf;
use super::pigment::Pigment;

/// A BRDF paired with an emitted-radiance pigment. Defaults to a black
/// diffuse surface with zero emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub brdf: Brdf,
    pub emitted_radiance: Pigment,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            brdf: Brdf::diffuse(Pigment::uniform(Color::BLACK), 1.0),
            emitted_radiance: Pigment::uniform(Color::BLACK),
        }
    }
}

/// An index into a [`crate::scene::Scene`]'s material table. Copyable and
/// trivially comparable, used in place of a reference-counted pointer so
/// shapes can share a material without shared-ownership machinery.
pub type MaterialId = usize;
