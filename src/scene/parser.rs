use std::collections::HashMap;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{GrammarError, SourceLocation};
use crate::geometry::{degs_to_rads, Transformation, Vec3};
use crate::material::{Brdf, Material, MaterialId, Pigment};
use crate::light::PointLightSource;
use crate::shapes::{Plane, Shape, Sphere};
use crate::world::World;

use super::lexer::Lexer;
use super::token::{Keyword, Token};

/// The populated scene graph and renderer configuration produced by parsing
/// a scene file.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub float_variables: HashMap<String, f32>,
    pub materials: Vec<Material>,
    pub material_names: HashMap<String, MaterialId>,
    pub world: World,
    pub camera: Option<Camera>,
}

pub fn parse_scene(source: &str) -> Result<Scene, GrammarError> {
    let mut parser = Parser {
        lexer: Lexer::new(source),
        scene: Scene::default(),
        camera_location: None,
    };
    parser.parse()?;
    Ok(parser.scene)
}

struct Parser {
    lexer: Lexer,
    scene: Scene,
    camera_location: Option<SourceLocation>,
}

impl Parser {
    fn parse(&mut self) -> Result<(), GrammarError> {
        loop {
            let t = self.lexer.read_token()?;
            match t.token {
                Token::Stop => return Ok(()),
                Token::Keyword(Keyword::New) => continue,
                Token::Keyword(Keyword::Float) => self.parse_float_decl()?,
                Token::Keyword(Keyword::Material) => self.parse_material_decl()?,
                Token::Keyword(Keyword::Sphere) => self.parse_sphere_decl()?,
                Token::Keyword(Keyword::Plane) => self.parse_plane_decl()?,
                Token::Keyword(Keyword::Camera) => self.parse_camera_decl(t.location)?,
                Token::Keyword(Keyword::PointLight) => self.parse_point_light_decl()?,
                _ => return Err(GrammarError::new(t.location, "expected a top-level declaration")),
            }
        }
    }

    fn expect_symbol(&mut self, expected: char) -> Result<(), GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::Symbol(c) if c == expected => Ok(()),
            _ => Err(GrammarError::new(t.location, format!("expected '{expected}'"))),
        }
    }

    fn expect_identifier(&mut self) -> Result<(String, SourceLocation), GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::Identifier(s) => Ok((s, t.location)),
            _ => Err(GrammarError::new(t.location, "expected an identifier")),
        }
    }

    fn expect_number_literal(&mut self) -> Result<f32, GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::LiteralNumber(n) => Ok(n),
            _ => Err(GrammarError::new(t.location, "expected a numeric literal")),
        }
    }

    fn expect_string_literal(&mut self) -> Result<String, GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::LiteralString(s) => Ok(s),
            _ => Err(GrammarError::new(t.location, "expected a string literal")),
        }
    }

    /// `num := FLOAT | IDENT`, identifiers resolved via `float_variables`.
    fn parse_num(&mut self) -> Result<f32, GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::LiteralNumber(n) => Ok(n),
            Token::Identifier(name) => self
                .scene
                .float_variables
                .get(&name)
                .copied()
                .ok_or_else(|| GrammarError::new(t.location, format!("unknown variable '{name}'"))),
            _ => Err(GrammarError::new(t.location, "expected a number or variable")),
        }
    }

    fn parse_vec(&mut self) -> Result<Vec3, GrammarError> {
        self.expect_symbol('[')?;
        let x = self.parse_num()?;
        self.expect_symbol(',')?;
        let y = self.parse_num()?;
        self.expect_symbol(',')?;
        let z = self.parse_num()?;
        self.expect_symbol(']')?;
        Ok(Vec3::new(x, y, z))
    }

    fn parse_color(&mut self) -> Result<Color, GrammarError> {
        self.expect_symbol('<')?;
        let r = self.parse_num()?;
        self.expect_symbol(',')?;
        let g = self.parse_num()?;
        self.expect_symbol(',')?;
        let b = self.parse_num()?;
        self.expect_symbol('>')?;
        Ok(Color::new(r, g, b))
    }

    /// `transform := atom { "*" atom }`, left-associative.
    fn parse_transform(&mut self) -> Result<Transformation, GrammarError> {
        let mut result = self.parse_transform_atom()?;
        loop {
            let t = self.lexer.read_token()?;
            match t.token {
                Token::Symbol('*') => {
                    let next = self.parse_transform_atom()?;
                    result = result * next;
                }
                _ => {
                    self.lexer.unread_token(t);
                    return Ok(result);
                }
            }
        }
    }

    fn parse_transform_atom(&mut self) -> Result<Transformation, GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::Keyword(Keyword::Identity) => Ok(Transformation::IDENTITY),
            Token::Keyword(Keyword::Translation) => {
                self.expect_symbol('(')?;
                let v = self.parse_vec()?;
                self.expect_symbol(')')?;
                Ok(Transformation::translation(v))
            }
            Token::Keyword(Keyword::Scaling) => {
                self.expect_symbol('(')?;
                let v = self.parse_vec()?;
                self.expect_symbol(')')?;
                Ok(Transformation::scaling(v.x, v.y, v.z))
            }
            Token::Keyword(Keyword::RotationX) => {
                self.expect_symbol('(')?;
                let a = self.parse_num()?;
                self.expect_symbol(')')?;
                Ok(Transformation::rotation_x(degs_to_rads(a)))
            }
            Token::Keyword(Keyword::RotationY) => {
                self.expect_symbol('(')?;
                let a = self.parse_num()?;
                self.expect_symbol(')')?;
                Ok(Transformation::rotation_y(degs_to_rads(a)))
            }
            Token::Keyword(Keyword::RotationZ) => {
                self.expect_symbol('(')?;
                let a = self.parse_num()?;
                self.expect_symbol(')')?;
                Ok(Transformation::rotation_z(degs_to_rads(a)))
            }
            _ => Err(GrammarError::new(t.location, "expected a transformation")),
        }
    }

    fn parse_pigment(&mut self) -> Result<Pigment, GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::Keyword(Keyword::Uniform) => {
                self.expect_symbol('(')?;
                let c = self.parse_color()?;
                self.expect_symbol(')')?;
                Ok(Pigment::uniform(c))
            }
            Token::Keyword(Keyword::Checkered) => {
                self.expect_symbol('(')?;
                let c1 = self.parse_color()?;
                self.expect_symbol(',')?;
                let c2 = self.parse_color()?;
                self.expect_symbol(',')?;
                let n = self.expect_number_literal()?;
                self.expect_symbol(')')?;
                Ok(Pigment::checkered(c1, c2, n as u32))
            }
            Token::Keyword(Keyword::Image) => {
                self.expect_symbol('(')?;
                let _path = self.expect_string_literal()?;
                self.expect_symbol(')')?;
                Err(GrammarError::new(t.location, "image pigments are not supported"))
            }
            _ => Err(GrammarError::new(t.location, "expected a pigment")),
        }
    }

    fn parse_brdf(&mut self) -> Result<Brdf, GrammarError> {
        let t = self.lexer.read_token()?;
        match t.token {
            Token::Keyword(Keyword::Diffuse) => {
                self.expect_symbol('(')?;
                let pigment = self.parse_pigment()?;
                self.expect_symbol(')')?;
                Ok(Brdf::diffuse(pigment, 1.0))
            }
            Token::Keyword(Keyword::Specular) => {
                self.expect_symbol('(')?;
                let pigment = self.parse_pigment()?;
                self.expect_symbol(')')?;
                Ok(Brdf::specular(pigment))
            }
            _ => Err(GrammarError::new(t.location, "expected a BRDF")),
        }
    }

    fn parse_float_decl(&mut self) -> Result<(), GrammarError> {
        let (name, _) = self.expect_identifier()?;
        self.expect_symbol('(')?;
        let value = self.expect_number_literal()?;
        self.expect_symbol(')')?;
        self.scene.float_variables.insert(name, value);
        Ok(())
    }

    fn parse_material_decl(&mut self) -> Result<(), GrammarError> {
        let (name, _) = self.expect_identifier()?;
        self.expect_symbol('(')?;
        let brdf = self.parse_brdf()?;
        self.expect_symbol(',')?;
        let emitted_radiance = self.parse_pigment()?;
        self.expect_symbol(')')?;

        let id = self.scene.materials.len();
        self.scene.materials.push(Material { brdf, emitted_radiance });
        self.scene.material_names.insert(name, id);
        Ok(())
    }

    fn lookup_material(&mut self) -> Result<MaterialId, GrammarError> {
        let (name, location) = self.expect_identifier()?;
        self.scene
            .material_names
            .get(&name)
            .copied()
            .ok_or_else(|| GrammarError::new(location, format!("unknown material '{name}'")))
    }

    fn parse_sphere_decl(&mut self) -> Result<(), GrammarError> {
        self.expect_symbol('(')?;
        let transformation = self.parse_transform()?;
        self.expect_symbol(',')?;
        let material = self.lookup_material()?;
        self.expect_symbol(')')?;
        self.scene.world.add_shape(Shape::Sphere(Sphere {
            transformation,
            material,
        }));
        Ok(())
    }

    fn parse_plane_decl(&mut self) -> Result<(), GrammarError> {
        self.expect_symbol('(')?;
        let transformation = self.parse_transform()?;
        self.expect_symbol(',')?;
        let material = self.lookup_material()?;
        self.expect_symbol(')')?;
        self.scene.world.add_shape(Shape::Plane(Plane {
            transformation,
            material,
        }));
        Ok(())
    }

    fn parse_camera_decl(&mut self, location: SourceLocation) -> Result<(), GrammarError> {
        if self.camera_location.is_some() {
            return Err(GrammarError::new(location, "camera already defined"));
        }
        self.camera_location = Some(location);

        self.expect_symbol('(')?;
        let kind_token = self.lexer.read_token()?;
        let is_perspective = match kind_token.token {
            Token::Keyword(Keyword::Orthogonal) => false,
            Token::Keyword(Keyword::Perspective) => true,
            _ => return Err(GrammarError::new(kind_token.location, "expected 'orthogonal' or 'perspective'")),
        };
        self.expect_symbol(',')?;
        let transformation = self.parse_transform()?;
        self.expect_symbol(',')?;
        let aspect_ratio = self.parse_num()?;
        self.expect_symbol(',')?;
        let distance = self.parse_num()?;
        self.expect_symbol(')')?;

        self.scene.camera = Some(if is_perspective {
            Camera::Perspective {
                transformation,
                aspect_ratio,
                distance,
            }
        } else {
            Camera::Orthogonal {
                transformation,
                aspect_ratio,
            }
        });
        Ok(())
    }

    fn parse_point_light_decl(&mut self) -> Result<(), GrammarError> {
        self.expect_symbol('(')?;
        let v = self.parse_vec()?;
        self.expect_symbol(',')?;
        let color = self.parse_color()?;
        let mut emission_radius = 0.0;
        let t = self.lexer.read_token()?;
        match t.token {
            Token::Symbol(',') => {
                emission_radius = self.expect_number_literal()?;
                self.expect_symbol(')')?;
            }
            Token::Symbol(')') => {}
            _ => return Err(GrammarError::new(t.location, "expected ',' or ')'")),
        }
        self.scene.world.add_light(PointLightSource {
            position: crate::geometry::Point::new(v.x, v.y, v.z),
            color,
            emission_radius,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::degs_to_rads;

    const EXAMPLE_SCENE: &str = r#"
        float clock(150)

        material sky_material(
            diffuse(uniform(<0, 0, 0>)),
            uniform(<0.7, 0.5, 1>)
        )

        material ground_material(
            diffuse(checkered(<0.3, 0.5, 0.1>, <0.1, 0.2, 0.5>, 4)),
            uniform(<0, 0, 0>)
        )

        material sphere_material(
            specular(uniform(<0.5, 0.5, 0.5>)),
            uniform(<0, 0, 0>)
        )

        plane(translation([0, 0, 100]) * rotation_y(clock), sky_material)
        plane(identity, ground_material)
        sphere(translation([0, 0, 1]), sphere_material)

        camera(perspective, rotation_z(30) * translation([-4, 0, 1]), 1.0, 2.0)
    "#;

    #[test]
    fn parses_the_example_scene() {
        let scene = parse_scene(EXAMPLE_SCENE).unwrap();

        assert_eq!(scene.float_variables.get("clock"), Some(&150.0));
        assert_eq!(scene.materials.len(), 3);
        assert_eq!(scene.world.shapes.len(), 3);

        let expected_camera = Camera::Perspective {
            transformation: Transformation::rotation_z(degs_to_rads(30.0))
                * Transformation::translation(Vec3::new(-4.0, 0.0, 1.0)),
            aspect_ratio: 1.0,
            distance: 2.0,
        };
        assert_eq!(scene.camera, Some(expected_camera));
    }

    #[test]
    fn undefined_material_is_reported() {
        let err = parse_scene("sphere(identity, nope)").unwrap_err();
        assert!(err.message().contains("unknown material"));
        assert_eq!(err.location(), SourceLocation::new(1, 18));
    }

    #[test]
    fn duplicate_camera_is_rejected() {
        let source = "camera(orthogonal, identity, 1, 1)\ncamera(orthogonal, identity, 1, 1)";
        let err = parse_scene(source).unwrap_err();
        assert!(err.message().contains("camera already defined"));
        assert_eq!(err.location(), SourceLocation::new(2, 1));
    }
}
