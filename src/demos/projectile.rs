use crate::{
    math::{color::Color, point::Point, tuple::Tuple, vector::Vector},
    render::canvas::Canvas,
};

pub const WIDTH: usize = 900;
pub const HEIGHT: usize = 550;

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    position: Point,
    velocity: Vector,
}

impl Projectile {
    pub fn new(position: Point, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Environment {
    gravity: Vector,
    wind: Vector,
}

impl Environment {
    pub fn new(gravity: Vector, wind: Vector) -> Self {
        Self { gravity, wind }
    }

    /// Moves the projectile by its velocity, then lets gravity and wind act on it.
    pub fn tick(&self, projectile: Projectile) -> Projectile {
        Projectile::new(
            projectile.position + projectile.velocity,
            projectile.velocity + self.gravity + self.wind,
        )
    }
}

/// Canvas coordinates of a world position, or `None` when it falls off the canvas.
fn canvas_position(canvas: &Canvas, position: Point) -> Option<(usize, usize)> {
    if position.x() < 0. || position.y() < 0. {
        return None;
    }
    let x = position.x() as usize;
    let y = canvas.height().checked_sub(position.y() as usize)?;

    (x < canvas.width() && y < canvas.height()).then_some((x, y))
}

/// Plots the trajectory of a projectile until it falls below the ground.
pub fn run() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    let mut projectile = Projectile::new(
        Point::new(0., 1., 0.),
        Vector::new(1., 1.8, 0.).normalize() * 11.25,
    );
    let env = Environment::new(Vector::new(0., -0.1, 0.), Vector::new(-0.01, 0., 0.));

    while projectile.position().y() > 0. {
        if let Some((x, y)) = canvas_position(&canvas, projectile.position()) {
            canvas.write_pixel(x, y, Color::white());
        }
        projectile = env.tick(projectile);
    }
    canvas
}
