use std::f64::consts::PI;

use crate::{
    math::{color::Color, matrix::Matrix, point::Point, tuple::Tuple, vector::Vector},
    render::canvas::Canvas,
};

pub const SIZE: usize = 200;
const ARM_LENGTH: f64 = 80.;

/// Positions of the twelve hour marks, starting at twelve o'clock and going counterclockwise.
pub fn hour_marks() -> Vec<Point> {
    let center = Point::new(SIZE as f64 / 2., SIZE as f64 / 2., 0.);
    let rotation = Matrix::rotation_z(PI / 6.);

    let mut arm = Vector::new(0., ARM_LENGTH, 0.);
    let mut marks = Vec::with_capacity(12);
    for _ in 0..12 {
        marks.push(center + arm);
        arm = &rotation * arm;
    }
    marks
}

/// Draws one white dot per hour on a clock face.
pub fn run() -> Canvas {
    let mut canvas = Canvas::new(SIZE, SIZE);

    for mark in hour_marks() {
        let x = mark.x().round() as usize;
        let y = SIZE - mark.y().round() as usize;
        canvas.write_pixel(x, y, Color::white());
    }
    canvas
}
