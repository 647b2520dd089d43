use crate::{
    math::{point::Point, vector::Vector},
    scene::{material::Material, shape::Shape},
};

use super::ray::Ray;

/// Anything a ray can be cast against: a single shape or a whole world.
pub trait Intersect: Sync {
    /// All intersections along the ray, including those behind its origin.
    fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>>;
}

/// Ray-shape intersection resolved into everything shading needs.
#[derive(Debug, Clone)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a dyn Shape,
    point: Point,
    eye_v: Vector,
    normal_v: Vector,
    inside: bool,
    material: Material,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, ray: &Ray, object: &'a dyn Shape) -> Self {
        let point = ray.position(time);
        let eye_v = -*ray.direction();
        let mut normal_v = object.normal_at(point);

        // normal facing away from the eye means the hit is on the inner surface
        let inside = normal_v.dot(eye_v) < 0.;
        if inside {
            normal_v = -normal_v;
        }

        Self {
            time,
            object,
            point,
            eye_v,
            normal_v,
            inside,
            material: *object.material(),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a dyn Shape {
        self.object
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }
    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }
    pub fn inside(&self) -> bool {
        self.inside
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// Intersection with the lowest non-negative time. Equal times resolve to the earlier one.
pub fn hit<'i, 'a>(intersections: &'i [Intersection<'a>]) -> Option<&'i Intersection<'a>> {
    intersections
        .iter()
        .filter(|inter| inter.time() >= 0.)
        .fold(None, |best, inter| match best {
            Some(best) if best.time() <= inter.time() => Some(best),
            _ => Some(inter),
        })
}
