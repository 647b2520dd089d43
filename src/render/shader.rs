use log::warn;

use crate::{
    math::color::Color,
    scene::{light::PointLight, world::World},
};

use super::{
    intersection::{Intersect, hit},
    ray::Ray,
};

/// Strategy that turns a camera ray into a pixel color.
pub trait Shader: Sync {
    fn color_at(&self, scene: &dyn Intersect, ray: &Ray) -> Color;
}

/// Flat color wherever the ray hits anything, black elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilhouetteShader {
    color: Color,
}

impl SilhouetteShader {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for SilhouetteShader {
    fn default() -> Self {
        Self::new(Color::red())
    }
}

impl Shader for SilhouetteShader {
    fn color_at(&self, scene: &dyn Intersect, ray: &Ray) -> Color {
        match hit(&scene.intersect(ray)) {
            Some(_) => self.color,
            None => Color::black(),
        }
    }
}

/// Phong shading of the hit under a single point light.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointLightShader {
    light: PointLight,
}

impl PointLightShader {
    pub fn new(light: PointLight) -> Self {
        Self { light }
    }

    /// Uses the world's light, or the default one if the world has none.
    pub fn from_world(world: &World) -> Self {
        match world.light_sources() {
            [] => {
                warn!("scene has no light source, using the default one");
                Self::default()
            }
            [light] => Self::new(*light),
            [light, rest @ ..] => {
                warn!(
                    "only a single light source is supported, ignoring {} others",
                    rest.len()
                );
                Self::new(*light)
            }
        }
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }
}

impl Shader for PointLightShader {
    fn color_at(&self, scene: &dyn Intersect, ray: &Ray) -> Color {
        let intersections = scene.intersect(ray);
        match hit(&intersections) {
            Some(hit) => self.light.color_of_illuminated_point(
                hit.material(),
                hit.point(),
                hit.eye_v(),
                hit.normal_v(),
            ),
            None => Color::black(),
        }
    }
}
