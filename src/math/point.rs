use std::ops;

use super::{approx_eq::ApproxEq, tuple::Tuple, vector::Vector};

#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Point {
    const W: f64 = 1.;

    fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}

impl Point {
    pub fn zero() -> Self {
        Self::new(0., 0., 0.)
    }
}

impl ApproxEq for Point {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_epsilon(&other.x, epsilon)
            && self.y.approx_eq_epsilon(&other.y, epsilon)
            && self.z.approx_eq_epsilon(&other.z, epsilon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x + rhs.x(),
            y: self.y + rhs.y(),
            z: self.z + rhs.z(),
        }
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x - rhs.x(),
            y: self.y - rhs.y(),
            z: self.z - rhs.z(),
        }
    }
}
