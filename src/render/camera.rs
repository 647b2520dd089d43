use std::time::Instant;

use indicatif::ProgressBar;
use log::debug;

use crate::math::{matrix::Matrix, point::Point, tuple::Tuple};

use super::{canvas::Canvas, intersection::Intersect, ray::Ray, shader::Shader};

/// Pinhole camera looking down +z from (0, 0, -4) at a film plane at z = 0.
/// The film is 4 units wide; its height follows the pixel aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    transformation: Matrix,

    pixel_scale: f64,
    middle_x: f64,
    middle_y: f64,
}

impl Camera {
    const FILM_WIDTH: f64 = 4.;
    const EYE_DISTANCE: f64 = 4.;

    pub fn new(target_width: usize, target_height: usize) -> Self {
        Self::with_transformation(target_width, target_height, Matrix::identity())
    }

    /// Camera whose eye and film plane are both moved by `transformation`.
    /// The identity gives the same rays as `Camera::new`.
    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        transformation: Matrix,
    ) -> Self {
        assert!(
            target_width > 0 && target_height > 0,
            "camera dimensions must be positive, got {target_width}x{target_height}"
        );
        assert!(
            transformation.is_invertible(),
            "camera transformation must be invertible"
        );

        Self {
            target_width,
            target_height,
            transformation,

            pixel_scale: Self::FILM_WIDTH / target_width as f64,
            middle_x: (target_width - 1) as f64 / 2.,
            middle_y: (target_height - 1) as f64 / 2.,
        }
    }

    /// Point on the film plane hit by the ray through pixel `(x, y)`, before transformation.
    /// Pixel rows grow downwards while film y grows upwards.
    pub fn film_point_for_pixel(&self, x: usize, y: usize) -> Point {
        let film_x = (x as f64 - self.middle_x) * self.pixel_scale;
        let film_y = ((self.target_height - 1 - y) as f64 - self.middle_y) * self.pixel_scale;

        Point::new(film_x, film_y, 0.)
    }

    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let origin = &self.transformation * Point::new(0., 0., -Self::EYE_DISTANCE);
        let film_point = &self.transformation * self.film_point_for_pixel(x, y);

        Ray::new(origin, (film_point - origin).normalize())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.target_width, self.target_height)
    }

    pub fn render(&self, scene: &dyn Intersect, shader: &dyn Shader) -> Canvas {
        self.render_with_progress(scene, shader, ProgressBar::hidden())
    }

    /// Shades every pixel exactly once. Pixels are independent and computed in parallel.
    pub fn render_with_progress(
        &self,
        scene: &dyn Intersect,
        shader: &dyn Shader,
        progressbar: ProgressBar,
    ) -> Canvas {
        debug!(
            "rendering {}x{} image",
            self.target_width, self.target_height
        );
        let start = Instant::now();

        let mut image = self.canvas();
        image.set_each_pixel(
            |x, y| shader.color_at(scene, &self.ray_for_pixel(x, y)),
            progressbar,
        );

        debug!("rendered in {:.2?}", start.elapsed());
        image
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }
}
