use crate::math::{color::Color, point::Point, tuple::Tuple, vector::Vector};

use super::material::Material;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    position: Point,
    intensity: Color,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Point::new(-10., 10., -10.), Color::white())
    }
}

impl PointLight {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Phong reflection of this light off `point`, seen from `eye_v`.
    /// The result is not clamped and may leave the `[0, 1]` range.
    pub fn color_of_illuminated_point(
        &self,
        material: &Material,
        point: Point,
        eye_v: Vector,
        normal_v: Vector,
    ) -> Color {
        // combine surface color with light's intensity (color)
        let effective_color = material.color() * self.intensity;

        // direction to the light source
        let light_v = (self.position - point).normalize();

        let ambient = effective_color * material.ambient;

        let light_dot_normal = light_v.dot(normal_v);

        // light is on the other side of the surface
        if light_dot_normal <= 0. {
            return ambient;
        }
        let diffuse = effective_color * material.diffuse * light_dot_normal;

        let reflect_v = (-light_v).reflect(normal_v);
        let reflect_dot_eye = reflect_v.dot(eye_v);

        // light reflects away from the eye
        let specular = if reflect_dot_eye <= 0. {
            Color::black()
        } else {
            let factor = reflect_dot_eye.powf(material.shininess);
            self.intensity * material.specular * factor
        };

        ambient + diffuse + specular
    }
}
