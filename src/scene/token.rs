use crate::error::SourceLocation;

/// Reserved words of the scene description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    New,
    Material,
    Plane,
    Sphere,
    Diffuse,
    Specular,
    Uniform,
    Checkered,
    Image,
    Identity,
    Translation,
    RotationX,
    RotationY,
    RotationZ,
    Scaling,
    Camera,
    Orthogonal,
    Perspective,
    Float,
    PointLight,
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "new" => Keyword::New,
            "material" => Keyword::Material,
            "plane" => Keyword::Plane,
            "sphere" => Keyword::Sphere,
            "diffuse" => Keyword::Diffuse,
            "specular" => Keyword::Specular,
            "uniform" => Keyword::Uniform,
            "checkered" => Keyword::Checkered,
            "image" => Keyword::Image,
            "identity" => Keyword::Identity,
            "translation" => Keyword::Translation,
            "rotation_x" => Keyword::RotationX,
            "rotation_y" => Keyword::RotationY,
            "rotation_z" => Keyword::RotationZ,
            "scaling" => Keyword::Scaling,
            "camera" => Keyword::Camera,
            "orthogonal" => Keyword::Orthogonal,
            "perspective" => Keyword::Perspective,
            "float" => Keyword::Float,
            "point_light" => Keyword::PointLight,
            _ => return None,
        })
    }
}

/// A lexical token, independent of its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Keyword(Keyword),
    Identifier(String),
    LiteralNumber(f32),
    LiteralString(String),
    Symbol(char),
    Stop,
}

/// A token paired with the 1-based location of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceToken {
    pub token: Token,
    pub location: SourceLocation,
}
