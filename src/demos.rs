//! Hand-built demo scenes, grounded on the original project's `demo.hpp`.
//! Not part of the render pipeline proper; useful as integration-test
//! fixtures and as copy-paste starting points for hosts embedding the crate.

use crate::camera::Camera;
use crate::color::Color;
use crate::geometry::{degs_to_rads, Point, Transformation, Vec3};
use crate::light::PointLightSource;
use crate::material::{Brdf, Material, Pigment};
use crate::shapes::{Plane, Shape, Sphere};
use crate::world::World;

/// Ten unit spheres scaled down at the corners of a cube (plus two extra
/// markers), viewed with an orthogonal camera; a simple, fast scene for
/// exercising the on/off renderer.
pub fn make_demo_world_onoff() -> (World, Camera, Vec<Material>) {
    let mut world = World::new();
    let materials = vec![Material {
        brdf: Brdf::diffuse(Pigment::uniform(Color::WHITE), 1.0),
        emitted_radiance: Pigment::uniform(Color::BLACK),
    }];

    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                world.add_shape(Shape::Sphere(Sphere {
                    transformation: Transformation::translation(Vec3::new(x, y, z))
                        * Transformation::scaling(0.1, 0.1, 0.1),
                    material: 0,
                }));
            }
        }
    }
    world.add_shape(Shape::Sphere(Sphere {
        transformation: Transformation::translation(Vec3::new(0.0, 0.5, 0.0))
            * Transformation::scaling(0.1, 0.1, 0.1),
        material: 0,
    }));
    world.add_shape(Shape::Sphere(Sphere {
        transformation: Transformation::translation(Vec3::new(0.0, 0.0, -0.5))
            * Transformation::scaling(0.1, 0.1, 0.1),
        material: 0,
    }));

    let camera = Camera::Orthogonal {
        transformation: Transformation::translation(Vec3::new(-1.0, 0.0, 0.0)),
        aspect_ratio: 1.0,
    };
    (world, camera, materials)
}

/// An emissive sky sphere, a checkered ground plane, a specular sphere and a
/// diffuse sphere, lit for path tracing.
pub fn make_demo_world_path_traced() -> (World, Camera, Vec<Material>) {
    let mut world = World::new();
    let materials = vec![
        Material {
            brdf: Brdf::diffuse(Pigment::uniform(Color::BLACK), 1.0),
            emitted_radiance: Pigment::uniform(Color::new(1.0, 0.9, 0.8)),
        },
        Material {
            brdf: Brdf::diffuse(
                Pigment::checkered(Color::new(0.3, 0.5, 0.1), Color::new(0.1, 0.2, 0.5), 4),
                0.8,
            ),
            emitted_radiance: Pigment::uniform(Color::BLACK),
        },
        Material {
            brdf: Brdf::specular(Pigment::uniform(Color::new(0.6, 0.6, 0.6))),
            emitted_radiance: Pigment::uniform(Color::BLACK),
        },
    ];

    world.add_shape(Shape::Sphere(Sphere {
        transformation: Transformation::scaling(200.0, 200.0, 200.0),
        material: 0,
    }));
    world.add_shape(Shape::Plane(Plane {
        transformation: Transformation::IDENTITY,
        material: 1,
    }));
    world.add_shape(Shape::Sphere(Sphere {
        transformation: Transformation::translation(Vec3::new(0.0, 0.0, 1.0)),
        material: 2,
    }));

    world.add_light(PointLightSource::new(Point::new(-2.0, 3.0, 5.0), Color::WHITE));

    let camera = Camera::Perspective {
        transformation: Transformation::rotation_z(degs_to_rads(30.0))
            * Transformation::translation(Vec3::new(-4.0, 0.0, 1.0)),
        aspect_ratio: 1.0,
        distance: 2.0,
    };
    (world, camera, materials)
}
