use enum_dispatch::enum_dispatch;

use crate::color::Color;
use crate::geometry::Vec2d;

#[enum_dispatch]
pub trait PigmentEval {
    fn eval(&self, uv: Vec2d) -> Color;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformPigment {
    pub color: Color,
}

impl PigmentEval for UniformPigment {
    fn eval(&self, _uv: Vec2d) -> Color {
        self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckeredPigment {
    pub color1: Color,
    pub color2: Color,
    pub n_intervals: u32,
}

impl PigmentEval for CheckeredPigment {
    fn eval(&self, uv: Vec2d) -> Color {
        let n = self.n_intervals as f32;
        let col = (uv.u * n).floor() as i64;
        let row = (uv.v * n).floor() as i64;
        if (col + row) % 2 == 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

/// A grammatically-valid but unconstructible-from-the-DSL pigment kind.
/// Textured image pigments are out of scope; the parser rejects
/// `image(...)` at scene-construction time (see [`crate::scene`]), but this
/// variant still exists so the enum models the full grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePigment;

impl PigmentEval for ImagePigment {
    fn eval(&self, _uv: Vec2d) -> Color {
        Color::BLACK
    }
}

#[enum_dispatch(PigmentEval)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pigment {
    Uniform(UniformPigment),
    Checkered(CheckeredPigment),
    Image(ImagePigment),
}

impl Pigment {
    pub fn uniform(color: Color) -> Self {
        Pigment::Uniform(UniformPigment { color })
    }

    pub fn checkered(color1: Color, color2: Color, n_intervals: u32) -> Self {
        Pigment::Checkered(CheckeredPigment {
            color1,
            color2,
            n_intervals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkered_alternates_in_both_axes() {
        let p = Pigment::checkered(Color::WHITE, Color::BLACK, 2);
        assert_eq!(p.eval(Vec2d::new(0.25, 0.25)), Color::WHITE);
        assert_eq!(p.eval(Vec2d::new(0.75, 0.25)), Color::BLACK);
        assert_eq!(p.eval(Vec2d::new(0.25, 0.75)), Color::BLACK);
        assert_eq!(p.eval(Vec2d::new(0.75, 0.75)), Color::WHITE);
    }

    #[test]
    fn uniform_ignores_uv() {
        let p = Pigment::uniform(Color::new(0.1, 0.2, 0.3));
        assert_eq!(p.eval(Vec2d::new(0.0, 0.0)), p.eval(Vec2d::new(0.9, 0.9)));
    }
}
