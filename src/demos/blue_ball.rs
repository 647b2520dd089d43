use crate::{
    math::color::Color,
    render::{camera::Camera, canvas::Canvas, shader::PointLightShader},
    scene::{material::Material, sphere::Sphere},
};

/// Unit sphere lit by the default point light.
pub fn run(width: usize, height: usize) -> Canvas {
    let sphere = Sphere::with_material(Material::with_color(Color::new(1., 0.2, 1.)));

    Camera::new(width, height).render(&sphere, &PointLightShader::default())
}
