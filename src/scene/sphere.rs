use crate::{
    math::{matrix::Matrix, point::Point, transform::Transform, vector::Vector},
    render::{
        intersection::{Intersect, Intersection},
        ray::Ray,
    },
};

use super::{
    material::Material,
    shape::{self, ObjectTransform, Shape},
};

/// Unit sphere centered at the object space origin.
#[derive(Debug, Clone, Default)]
pub struct Sphere {
    transform: ObjectTransform,
    material: Material,
}

impl Sphere {
    pub fn new(transformation: Matrix, material: Material) -> Self {
        Self::from_object_transform(ObjectTransform::new(transformation), material)
    }

    pub fn from_object_transform(transform: ObjectTransform, material: Material) -> Self {
        Self {
            transform,
            material,
        }
    }

    pub fn with_transformation(transformation: Matrix) -> Self {
        Self::new(transformation, Material::default())
    }

    pub fn with_material(material: Material) -> Self {
        Self::new(Matrix::identity(), material)
    }

    /// Replaces the transformation, recomputing its inverse and inverse transpose.
    pub fn set_transformation(&mut self, transformation: Matrix) {
        self.transform = ObjectTransform::new(transformation);
    }
}

impl Transform for Sphere {
    fn transform(&mut self, matrix: &Matrix) {
        self.set_transformation(matrix * self.transformation());
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        shape::intersect_shape(self, ray)
    }
}

impl Shape for Sphere {
    fn object_transform(&self) -> &ObjectTransform {
        &self.transform
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    fn local_intersect(&self, object_ray: &Ray) -> Vec<f64> {
        let vector_sphere_to_ray = *object_ray.origin() - Point::zero();

        let a = object_ray.direction().dot(*object_ray.direction());
        let b = 2. * object_ray.direction().dot(vector_sphere_to_ray);
        let c = vector_sphere_to_ray.dot(vector_sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return Vec::new();
        }

        let delta_sqrt = discriminant.sqrt();
        vec![(-b - delta_sqrt) / (2. * a), (-b + delta_sqrt) / (2. * a)]
    }

    fn local_normal_at(&self, object_point: Point) -> Vector {
        object_point - Point::zero()
    }
}
