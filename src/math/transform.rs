use super::{matrix::Matrix, tuple::Axis};

/// Single named transformation, as written in scene files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    Scaling(f64, f64, f64),
    Translation(f64, f64, f64),
    Rotation(Axis, f64),
    Shearing(f64, f64, f64, f64, f64, f64),
    Identity,
}

impl Transformation {
    pub fn scaling_uniform(f: f64) -> Self {
        Self::Scaling(f, f, f)
    }
}

impl From<Transformation> for Matrix {
    fn from(val: Transformation) -> Self {
        match val {
            Transformation::Scaling(x, y, z) => Matrix::scaling(x, y, z),
            Transformation::Translation(x, y, z) => Matrix::translation(x, y, z),
            Transformation::Rotation(axis, radians) => Matrix::rotation(axis, radians),
            Transformation::Shearing(xpy, xpz, ypx, ypz, zpx, zpy) => {
                Matrix::shearing(xpy, xpz, ypx, ypz, zpx, zpy)
            }
            Transformation::Identity => Matrix::identity(),
        }
    }
}

/// Folds a list so that its first entry is applied to a tuple first.
impl From<&[Transformation]> for Matrix {
    fn from(val: &[Transformation]) -> Self {
        val.iter().fold(Matrix::identity(), |acc, t| {
            acc.transform_new(&Matrix::from(*t))
        })
    }
}

/// Anything that can be moved around by a 4x4 transformation.
///
/// The chaining helpers prepend: `m.rotate_z(a).scale(x, y, z)` becomes
/// `scaling * rotation_z * m`, so the rotation is applied to a tuple before the scaling.
pub trait Transform: Sized + Clone {
    fn transform(&mut self, matrix: &Matrix);

    fn transform_new(&self, matrix: &Matrix) -> Self {
        let mut copy = self.clone();
        copy.transform(matrix);
        copy
    }

    /// Ends a chain of `&mut Self` calls with an owned value.
    fn transformed(&self) -> Self {
        self.clone()
    }

    fn transform_chain(&mut self, transformation: &Matrix) -> &mut Self {
        self.transform(transformation);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling(x, y, z))
    }

    fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling_uniform(factor))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_z(radians))
    }

    fn sheare(
        &mut self,
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> &mut Self {
        self.transform_chain(&Matrix::shearing(
            x_prop_y, x_prop_z, y_prop_x, y_prop_z, z_prop_x, z_prop_y,
        ))
    }
}
