use crate::{
    math::{color::Color, matrix::Matrix, point::Point, tuple::Tuple},
    render::{
        intersection::{Intersect, Intersection},
        ray::Ray,
    },
};

use super::{light::PointLight, material::Material, shape::Shape, sphere::Sphere};

/// Every shape and light of a scene, in insertion order.
#[derive(Debug, Default)]
pub struct World {
    shapes: Vec<Box<dyn Shape>>,
    light_sources: Vec<PointLight>,
}

impl World {
    pub fn new(shapes: Vec<Box<dyn Shape>>, light_sources: Vec<PointLight>) -> Self {
        Self {
            shapes,
            light_sources,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Two concentric spheres lit by a single white light at (-10, 10, -10).
    pub fn default_testing() -> Self {
        let outer = Sphere::with_material(Material {
            color: Color::new(0.8, 1., 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        });
        let inner = Sphere::with_transformation(Matrix::scaling_uniform(0.5));

        Self::new(
            vec![Box::new(outer), Box::new(inner)],
            vec![PointLight::new(Point::new(-10., 10., -10.), Color::white())],
        )
    }

    pub fn add_shape(&mut self, shape: impl Shape + 'static) {
        self.shapes.push(Box::new(shape));
    }

    pub fn add_light(&mut self, light_source: PointLight) {
        self.light_sources.push(light_source);
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [Box<dyn Shape>] {
        &mut self.shapes
    }

    pub fn light_sources(&self) -> &[PointLight] {
        &self.light_sources
    }
}

impl Intersect for World {
    /// Intersections of all shapes, sorted by time. Equal times keep shape order.
    fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        let mut intersections: Vec<Intersection> = self
            .shapes
            .iter()
            .flat_map(|shape| shape.intersect(ray))
            .collect();
        intersections.sort_by(|a, b| a.time().total_cmp(&b.time()));
        intersections
    }
}
