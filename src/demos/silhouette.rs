use std::f64::consts::FRAC_PI_4;

use crate::{
    math::{matrix::Matrix, transform::Transform},
    render::{camera::Camera, canvas::Canvas, shader::SilhouetteShader},
    scene::sphere::Sphere,
};

/// Red silhouette of a sphere squashed along x, then tilted by π/4.
pub fn run(width: usize, height: usize) -> Canvas {
    let sphere = Sphere::with_transformation(
        Matrix::identity()
            .scale(0.5, 1., 1.)
            .rotate_z(FRAC_PI_4)
            .transformed(),
    );

    Camera::new(width, height).render(&sphere, &SilhouetteShader::default())
}
