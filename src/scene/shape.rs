use std::fmt::Debug;

use crate::{
    math::{matrix::Matrix, point::Point, transform::Transform, vector::Vector},
    render::{
        intersection::{Intersect, Intersection},
        ray::Ray,
    },
};

use super::material::Material;

/// Object to world transformation together with the matrices derived from it.
/// The three are only ever built together, so they cannot get out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTransform {
    transformation: Matrix,
    inverse: Matrix,
    inverse_transpose: Matrix,
}

impl ObjectTransform {
    /// Panics if `transformation` is singular.
    pub fn new(transformation: Matrix) -> Self {
        let inverse = transformation.inverse();
        let inverse_transpose = inverse.transpose();
        Self {
            transformation,
            inverse,
            inverse_transpose,
        }
    }

    pub fn try_new(transformation: Matrix) -> Option<Self> {
        let inverse = transformation.try_inverse()?;
        let inverse_transpose = inverse.transpose();
        Some(Self {
            transformation,
            inverse,
            inverse_transpose,
        })
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }
    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }
    pub fn inverse_transpose(&self) -> &Matrix {
        &self.inverse_transpose
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            transformation: Matrix::identity(),
            inverse: Matrix::identity(),
            inverse_transpose: Matrix::identity(),
        }
    }
}

/// Solid that lives in its own object space, placed in the world by a transformation.
///
/// Implementors only describe their unit geometry in object space;
/// the conversions to and from world space are shared.
pub trait Shape: Intersect + Debug + Send + Sync {
    fn object_transform(&self) -> &ObjectTransform;

    fn material(&self) -> &Material;

    fn material_mut(&mut self) -> &mut Material;

    /// Times at which an object space ray crosses the surface, in ascending order.
    fn local_intersect(&self, object_ray: &Ray) -> Vec<f64>;

    fn local_normal_at(&self, object_point: Point) -> Vector;

    fn transformation(&self) -> &Matrix {
        self.object_transform().transformation()
    }

    /// World space unit normal at a world space point on the surface.
    fn normal_at(&self, world_point: Point) -> Vector {
        let transform = self.object_transform();
        let object_point = transform.inverse() * world_point;
        let object_normal = self.local_normal_at(object_point);
        transform
            .inverse_transpose()
            .transform_normal(object_normal)
            .normalize()
    }
}

/// Casts a world space ray against a shape and resolves every crossing.
pub fn intersect_shape<'a, S: Shape>(shape: &'a S, ray: &Ray) -> Vec<Intersection<'a>> {
    let object_ray = ray.transform_new(shape.object_transform().inverse());
    shape
        .local_intersect(&object_ray)
        .into_iter()
        .map(|time| Intersection::new(time, ray, shape))
        .collect()
}
