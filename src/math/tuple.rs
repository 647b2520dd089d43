use super::{
    approx_eq::{ApproxEq, EPSILON},
    matrix::Matrix,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Point or vector in homogeneous coordinates.
/// The `w` component is fixed by the implementing type and never stored.
pub trait Tuple: Sized {
    const W: f64;

    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    fn w(&self) -> f64 {
        Self::W
    }

    /// Lifts the tuple into a 4x1 column matrix.
    fn to_column(&self) -> Matrix {
        Matrix::from_rows(&[[self.x()], [self.y()], [self.z()], [self.w()]])
    }

    /// Projects a 4x1 column back down to a tuple.
    /// Panics if the column has the wrong shape or its `w` doesn't match `Self::W`,
    /// which means the transformation that produced it was malformed.
    fn from_column(column: &Matrix) -> Self {
        assert!(
            column.rows() == 4 && column.cols() == 1,
            "tuple column must be of size 4x1, got {}x{}",
            column.rows(),
            column.cols()
        );
        let w = column[(3, 0)];
        assert!(
            w.approx_eq_epsilon(&Self::W, EPSILON),
            "homogeneous weight must be {} after transformation, got {}",
            Self::W,
            w
        );
        Self::new(column[(0, 0)], column[(1, 0)], column[(2, 0)])
    }
}
