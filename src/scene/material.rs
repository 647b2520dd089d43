use derive_builder::Builder;

use crate::math::color::Color;

/// Reflectance of a surface under the Phong model.
#[derive(Clone, Copy, Debug, PartialEq, Builder)]
#[builder(default)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,   // [0;1]
    pub diffuse: f64,   // [0;1]
    pub specular: f64,  // [0;1]
    pub shininess: f64, // [10;+inf) (typically up to 200.0)
}

impl Material {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}
