use std::ops;

use super::{
    approx_eq::ApproxEq,
    transform::Transform,
    tuple::{Axis, Tuple},
    vector::Vector,
};

/// Dense row-major matrix of arbitrary size.
/// Transformations use the 4x4 homogeneous form.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Transform for Matrix {
    fn transform(&mut self, matrix: &Matrix) {
        *self = matrix * (self as &Matrix);
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// 4x4 matrix from 16 values in row-major order.
    pub fn new(data: [f64; 16]) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: data.to_vec(),
        }
    }

    /// Zero matrix of the given size.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix dimensions must be positive, got {rows}x{cols}"
        );
        Self {
            rows,
            cols,
            data: vec![0.; rows * cols],
        }
    }

    /// Builds a matrix from literal rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut res = Self::with_size(rows.len(), cols);
        for (row_id, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                cols,
                "matrix row {row_id} has {} entries, expected {cols}",
                row.len()
            );
            res.data[row_id * cols..(row_id + 1) * cols].copy_from_slice(row);
        }
        res
    }

    pub fn identity() -> Self {
        Self::identity_with_size(4)
    }

    pub fn identity_with_size(size: usize) -> Self {
        let mut res = Self::with_size(size, size);
        for i in 0..size {
            res[(i, i)] = 1.;
        }
        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transpose(&self) -> Self {
        let mut res = Self::with_size(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                res[(col, row)] = self[(row, col)];
            }
        }
        res
    }

    /// Copy of the matrix with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(
            self.rows > 1 && self.cols > 1,
            "cannot take submatrix of a {}x{} matrix",
            self.rows,
            self.cols
        );
        self.check_bounds(row, col);

        let mut res = Self::with_size(self.rows - 1, self.cols - 1);
        let mut id = 0;
        for r in (0..self.rows).filter(|&r| r != row) {
            for c in (0..self.cols).filter(|&c| c != col) {
                res.data[id] = self[(r, c)];
                id += 1;
            }
        }
        res
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        assert!(
            self.is_square(),
            "determinant is undefined for a {}x{} matrix",
            self.rows,
            self.cols
        );
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => (0..self.cols)
                .map(|col| self[(0, col)] * self.cofactor(0, col))
                .sum(),
        }
    }

    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.determinant() != 0.
    }

    /// Inverse as the adjugate divided by the determinant, `None` if the matrix is singular.
    pub fn try_inverse(&self) -> Option<Self> {
        if !self.is_square() {
            return None;
        }
        let det = self.determinant();
        if det == 0. {
            return None;
        }
        if self.rows == 1 {
            return Some(Self::from_rows(&[[1. / det]]));
        }

        let mut res = Self::with_size(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                // transposed on assignment
                res[(col, row)] = self.cofactor(row, col) / det;
            }
        }
        Some(res)
    }

    pub fn inverse(&self) -> Self {
        self.try_inverse()
            .unwrap_or_else(|| panic!("cannot invert singular matrix {self:?}"))
    }

    /// Applies the upper 3x3 part to a normal, discarding whatever `w` the
    /// full product would have produced.
    pub fn transform_normal(&self, normal: Vector) -> Vector {
        self.assert_homogeneous();
        let row = |r: usize| {
            self[(r, 0)] * normal.x() + self[(r, 1)] * normal.y() + self[(r, 2)] * normal.z()
        };
        Vector::new(row(0), row(1), row(2))
    }

    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            1., 0., 0., x,
            0., 1., 0., y,
            0., 0., 1., z,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            x, 0., 0., 0.,
            0., y, 0., 0.,
            0., 0., z, 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn scaling_uniform(f: f64) -> Matrix {
        Self::scaling(f, f, f)
    }

    /// Rotation about `axis`, counterclockwise when looking down the axis towards the origin.
    pub fn rotation(axis: Axis, radians: f64) -> Matrix {
        let (sin_r, cos_r) = radians.sin_cos();
        let a = (axis.index() + 1) % 3;
        let b = (axis.index() + 2) % 3;

        let mut res = Self::identity();
        res[(a, a)] = cos_r;
        res[(a, b)] = -sin_r;
        res[(b, a)] = sin_r;
        res[(b, b)] = cos_r;
        res
    }

    pub fn rotation_x(radians: f64) -> Matrix {
        Self::rotation(Axis::X, radians)
    }

    pub fn rotation_y(radians: f64) -> Matrix {
        Self::rotation(Axis::Y, radians)
    }

    pub fn rotation_z(radians: f64) -> Matrix {
        Self::rotation(Axis::Z, radians)
    }

    #[rustfmt::skip]
    pub fn shearing(
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Matrix {
        Matrix::new([
            1., x_prop_y, x_prop_z, 0.,
            y_prop_x, 1., y_prop_z, 0.,
            z_prop_x, z_prop_y, 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
    }

    fn assert_homogeneous(&self) {
        assert!(
            self.rows == 4 && self.cols == 4,
            "expected a 4x4 transformation matrix, got {}x{}",
            self.rows,
            self.cols
        );
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(x, y)| x.approx_eq_epsilon(y, epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.check_bounds(row, col);
        &self.data[row * self.cols + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.check_bounds(row, col);
        &mut self.data[row * self.cols + col]
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;
    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "cannot multiply {}x{} matrix by {}x{} matrix",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut output = Matrix::with_size(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                output[(row, col)] = (0..self.cols)
                    .map(|k| self[(row, k)] * rhs[(k, col)])
                    .sum();
            }
        }
        output
    }
}

impl ops::MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        *self = (self as &Matrix) * rhs;
    }
}

impl<T> ops::Mul<T> for &Matrix
where
    T: Tuple,
{
    type Output = T;
    fn mul(self, rhs: T) -> Self::Output {
        T::from_column(&(self * &rhs.to_column()))
    }
}

impl<T> ops::Mul<T> for Matrix
where
    T: Tuple,
{
    type Output = T;
    #[allow(clippy::op_ref)]
    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;

    use super::*;
    use crate::{assert_approx_eq_low_prec, math::point::Point};

    fn sample_matrices() -> Vec<Matrix> {
        vec![
            Matrix::identity(),
            Matrix::translation(5., -3., 2.),
            Matrix::scaling(2., 3., 4.),
            Matrix::rotation_x(consts::FRAC_PI_4),
            Matrix::rotation_y(-consts::FRAC_PI_3),
            Matrix::rotation_z(consts::FRAC_PI_6),
            Matrix::shearing(1., 0., 0., 0., 0., 1.),
            Matrix::new([
                -5., 2., 6., -8.,
                1., -5., 1., 8.,
                7., 7., -6., -7.,
                1., -3., 7., 4.,
            ]),
            Matrix::new([
                8., -5., 9., 2.,
                7., 5., 6., 1.,
                -6., 0., 9., 6.,
                -3., 0., -9., -4.,
            ]),
        ]
    }

    /// Samples whose bottom row is `0 0 0 1`, so they keep points points.
    fn affine_matrices() -> Vec<Matrix> {
        let mut matrices: Vec<Matrix> = sample_matrices()
            .into_iter()
            .filter(|m| (0..4).all(|col| m[(3, col)] == if col == 3 { 1. } else { 0. }))
            .collect();
        matrices.push(
            Matrix::identity()
                .rotate_x(consts::FRAC_PI_3)
                .scale(1., 2., 0.5)
                .sheare(0., 1., 0., 0., 1., 0.)
                .translate(-1., 4., 2.)
                .transformed(),
        );
        matrices
    }

    #[test]
    fn affine_samples() {
        assert_eq!(affine_matrices().len(), 8);
    }

    #[test]
    #[rustfmt::skip]
    fn create_and_index() {
        let matrix = Matrix::new([
            1.0, 2.0, 3.0, 4.0,
            5.5, 6.5, 7.5, 8.5,
            9.0, 10.0, 11.0, 12.0,
            13.5, 14.5, 15.5, 16.5,
        ]);

        assert_approx_eq_low_prec!(matrix[(0, 0)], 1.0);
        assert_approx_eq_low_prec!(matrix[(0, 3)], 4.0);
        assert_approx_eq_low_prec!(matrix[(1, 0)], 5.5);
        assert_approx_eq_low_prec!(matrix[(1, 2)], 7.5);
        assert_approx_eq_low_prec!(matrix[(2, 2)], 11.0);
        assert_approx_eq_low_prec!(matrix[(3, 0)], 13.5);
        assert_approx_eq_low_prec!(matrix[(3, 2)], 15.5);
    }

    #[test]
    fn from_rows_non_square() {
        let m = Matrix::from_rows(&[[-3., 5., 0.], [1., -2., -7.]]);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_approx_eq_low_prec!(m[(0, 1)], 5.);
        assert_approx_eq_low_prec!(m[(1, 2)], -7.);
    }

    #[test]
    #[should_panic(expected = "matrix row 1 has 2 entries")]
    fn from_rows_ragged() {
        let rows: [&[f64]; 2] = [&[1., 2., 3.], &[4., 5.]];
        Matrix::from_rows(&rows);
    }

    #[test]
    #[should_panic(expected = "matrix dimensions must be positive")]
    fn zero_size() {
        Matrix::with_size(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let m = Matrix::identity();
        let _ = m[(4, 0)];
    }

    #[test]
    fn equality() {
        #[rustfmt::skip]
        let m1 = Matrix::new([
            1., 2., 3., 4.,
            5., 6., 7., 8.,
            9., 8., 7., 6.,
            5., 4., 3., 2.,
        ]);
        let m2 = m1.clone();
        #[rustfmt::skip]
        let other = Matrix::new([
            0., 2., 3., 4.,
            5., 6., 7., 8.,
            1., 2., 3., 4.,
            5., 6., 7., 8.,
        ]);

        assert_approx_eq_low_prec!(m1, m2);
        assert_ne!(m1, other);
        assert_ne!(Matrix::identity_with_size(3), Matrix::identity());
    }

    #[test]
    fn mul() {
        #[rustfmt::skip]
        let m1 = Matrix::new([
            1., 2., 3., 4.,
            5., 6., 7., 8.,
            9., 8., 7., 6.,
            5., 4., 3., 2.,
        ]);
        #[rustfmt::skip]
        let m2 = Matrix::new([
            -2., 1., 2., 3.,
            3., 2., 1., -1.,
            4., 3., 6., 5.,
            1., 2., 7., 8.,
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            20., 22., 50., 48.,
            44., 54., 114., 108.,
            40., 58., 110., 102.,
            16., 26., 46., 42.,
        ]);

        assert_approx_eq_low_prec!(m1 * m2, expected);
    }

    #[test]
    fn mul_non_square() {
        let m1 = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]);
        let m2 = Matrix::from_rows(&[[7., 8.], [9., 10.], [11., 12.]]);

        assert_approx_eq_low_prec!(
            &m1 * &m2,
            Matrix::from_rows(&[[58., 64.], [139., 154.]])
        );
    }

    #[test]
    #[should_panic(expected = "cannot multiply 2x3 matrix by 2x3 matrix")]
    fn mul_dimension_mismatch() {
        let m = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]);
        let _ = &m * &m;
    }

    #[test]
    fn mul_by_identity() {
        for m in sample_matrices() {
            assert_approx_eq_low_prec!(&m * &Matrix::identity_with_size(m.cols()), m);
        }
        let m = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]);
        assert_approx_eq_low_prec!(&m * &Matrix::identity_with_size(3), m);
    }

    #[test]
    fn mul_tuple() {
        #[rustfmt::skip]
        let m = Matrix::new([
            1., 2., 3., 4.,
            2., 4., 4., 2.,
            8., 6., 4., 1.,
            0., 0., 0., 1.,
        ]);

        assert_approx_eq_low_prec!(&m * Point::new(1., 2., 3.), Point::new(18., 24., 33.));
        assert_approx_eq_low_prec!(m * Vector::new(1., 2., 3.), Vector::new(14., 22., 32.));
    }

    #[test]
    fn transpose() {
        #[rustfmt::skip]
        let m = Matrix::new([
            0., 9., 3., 0.,
            9., 8., 0., 8.,
            1., 8., 5., 3.,
            0., 0., 5., 8.,
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            0., 9., 1., 0.,
            9., 8., 8., 0.,
            3., 0., 5., 5.,
            0., 8., 3., 8.,
        ]);

        assert_approx_eq_low_prec!(m.transpose(), expected);
        assert_approx_eq_low_prec!(Matrix::identity().transpose(), Matrix::identity());

        let rect = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]);
        assert_approx_eq_low_prec!(
            rect.transpose(),
            Matrix::from_rows(&[[1., 4.], [2., 5.], [3., 6.]])
        );
    }

    #[test]
    fn determinant_2x2() {
        let m = Matrix::from_rows(&[[1., 5.], [-3., 2.]]);
        assert_approx_eq_low_prec!(m.determinant(), 17.);
    }

    #[test]
    fn submatrices() {
        let m = Matrix::from_rows(&[[1., 5., 0.], [-3., 2., 7.], [0., 6., -3.]]);
        assert_approx_eq_low_prec!(m.submatrix(0, 2), Matrix::from_rows(&[[-3., 2.], [0., 6.]]));

        #[rustfmt::skip]
        let m = Matrix::new([
            -6., 1., 1., 6.,
            -8., 5., 8., 6.,
            -1., 0., 8., 2.,
            -7., 1., -1., 1.,
        ]);
        assert_approx_eq_low_prec!(
            m.submatrix(2, 1),
            Matrix::from_rows(&[[-6., 1., 6.], [-8., 8., 6.], [-7., -1., 1.]])
        );
    }

    #[test]
    fn minor_and_cofactor() {
        let m = Matrix::from_rows(&[[3., 5., 0.], [2., -1., -7.], [6., -1., 5.]]);

        assert_approx_eq_low_prec!(m.submatrix(1, 0).determinant(), 25.);
        assert_approx_eq_low_prec!(m.minor(1, 0), 25.);
        assert_approx_eq_low_prec!(m.minor(0, 0), -12.);
        assert_approx_eq_low_prec!(m.cofactor(0, 0), -12.);
        assert_approx_eq_low_prec!(m.cofactor(1, 0), -25.);
    }

    #[test]
    fn determinant_3x3() {
        let m = Matrix::from_rows(&[[1., 2., 6.], [-5., 8., -4.], [2., 6., 4.]]);

        assert_approx_eq_low_prec!(m.cofactor(0, 0), 56.);
        assert_approx_eq_low_prec!(m.cofactor(0, 1), 12.);
        assert_approx_eq_low_prec!(m.cofactor(0, 2), -46.);
        assert_approx_eq_low_prec!(m.determinant(), -196.);
    }

    #[test]
    fn determinant_4x4() {
        #[rustfmt::skip]
        let m = Matrix::new([
            -2., -8., 3., 5.,
            -3., 1., 7., 3.,
            1., 2., -9., 6.,
            -6., 7., 7., -9.,
        ]);

        assert_approx_eq_low_prec!(m.cofactor(0, 0), 690.);
        assert_approx_eq_low_prec!(m.cofactor(0, 1), 447.);
        assert_approx_eq_low_prec!(m.cofactor(0, 2), 210.);
        assert_approx_eq_low_prec!(m.cofactor(0, 3), 51.);
        assert_approx_eq_low_prec!(m.determinant(), -4071.);
    }

    #[test]
    #[should_panic(expected = "determinant is undefined for a 2x3 matrix")]
    fn determinant_non_square() {
        Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]).determinant();
    }

    #[test]
    fn invertibility() {
        #[rustfmt::skip]
        let invertible = Matrix::new([
            6., 4., 4., 4.,
            5., 5., 7., 6.,
            4., -9., 3., -7.,
            9., 1., 7., -6.,
        ]);
        #[rustfmt::skip]
        let singular = Matrix::new([
            -4., 2., -2., -3.,
            9., 6., 2., 6.,
            0., -5., 1., -5.,
            0., 0., 0., 0.,
        ]);

        assert_approx_eq_low_prec!(invertible.determinant(), -2120.);
        assert!(invertible.is_invertible());
        assert_approx_eq_low_prec!(singular.determinant(), 0.);
        assert!(!singular.is_invertible());
        assert!(singular.try_inverse().is_none());
        assert!(Matrix::scaling(1., 0., 1.).try_inverse().is_none());
    }

    #[test]
    fn inverse() {
        #[rustfmt::skip]
        let m = Matrix::new([
            -5., 2., 6., -8.,
            1., -5., 1., 8.,
            7., 7., -6., -7.,
            1., -3., 7., 4.,
        ]);
        let inv = m.inverse();

        assert_approx_eq_low_prec!(m.determinant(), 532.);
        assert_approx_eq_low_prec!(m.cofactor(2, 3), -160.);
        assert_approx_eq_low_prec!(inv[(3, 2)], -160. / 532.);
        assert_approx_eq_low_prec!(m.cofactor(3, 2), 105.);
        assert_approx_eq_low_prec!(inv[(2, 3)], 105. / 532.);

        #[rustfmt::skip]
        let expected = Matrix::new([
            0.21805, 0.45113, 0.24060, -0.04511,
            -0.80827, -1.45677, -0.44361, 0.52068,
            -0.07895, -0.22368, -0.05263, 0.19737,
            -0.52256, -0.81391, -0.30075, 0.30639,
        ]);
        assert_approx_eq_low_prec!(inv, expected);
    }

    #[test]
    fn inverse_small_sizes() {
        assert_approx_eq_low_prec!(
            Matrix::from_rows(&[[4.]]).inverse(),
            Matrix::from_rows(&[[0.25]])
        );
        assert_approx_eq_low_prec!(
            Matrix::from_rows(&[[4., 7.], [2., 6.]]).inverse(),
            Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]])
        );
    }

    #[test]
    fn mul_by_inverse_is_identity() {
        for m in sample_matrices() {
            assert_approx_eq_low_prec!(&m * &m.inverse(), Matrix::identity_with_size(m.rows()));
        }
    }

    #[test]
    fn mul_product_by_inverse() {
        #[rustfmt::skip]
        let a = Matrix::new([
            3., -9., 7., 3.,
            3., -8., 2., -9.,
            -4., 4., 4., 1.,
            -6., 5., -1., 1.,
        ]);
        #[rustfmt::skip]
        let b = Matrix::new([
            8., 2., 2., 2.,
            3., -1., 7., 0.,
            7., 0., 5., 4.,
            6., -2., 0., 5.,
        ]);
        let c = &a * &b;

        assert_approx_eq_low_prec!(&c * &b.inverse(), a);
    }

    #[test]
    fn point_round_trip() {
        let points = [
            Point::new(0., 0., 0.),
            Point::new(1., -2., 3.),
            Point::new(-4.5, 0.25, 10.),
        ];
        for m in affine_matrices() {
            let inv = m.inverse();
            for p in points {
                assert_approx_eq_low_prec!(&inv * (&m * p), p);
            }
        }
    }

    #[test]
    fn column_round_trip_through_general_matrix() {
        let p = Point::new(1., -2., 3.);
        for m in sample_matrices() {
            let column = &m.inverse() * &(&m * &p.to_column());
            assert_approx_eq_low_prec!(Point::from_column(&column), p);
        }
    }

    #[test]
    #[should_panic(expected = "cannot invert singular matrix")]
    fn inverse_singular() {
        Matrix::with_size(4, 4).inverse();
    }

    #[test]
    fn translation() {
        let transform = Matrix::translation(5., -3., 2.);
        let p = Point::new(-3., 4., 5.);

        assert_approx_eq_low_prec!(&transform * p, Point::new(2., 1., 7.));
        assert_approx_eq_low_prec!(&transform.inverse() * p, Point::new(-8., 7., 3.));

        let v = Vector::new(-3., 4., 5.);
        assert_approx_eq_low_prec!(&transform * v, v);
    }

    #[test]
    fn scaling() {
        let transform = Matrix::scaling(2., 3., 4.);

        assert_approx_eq_low_prec!(&transform * Point::new(-4., 6., 8.), Point::new(-8., 18., 32.));
        assert_approx_eq_low_prec!(
            &transform * Vector::new(-4., 6., 8.),
            Vector::new(-8., 18., 32.)
        );
        assert_approx_eq_low_prec!(
            &transform.inverse() * Vector::new(-4., 6., 8.),
            Vector::new(-2., 2., 2.)
        );
        assert_approx_eq_low_prec!(
            Matrix::scaling(-1., 1., 1.) * Point::new(2., 3., 4.),
            Point::new(-2., 3., 4.)
        );
    }

    #[test]
    fn rotation_x() {
        let p = Point::new(0., 1., 0.);

        assert_approx_eq_low_prec!(
            Matrix::rotation_x(consts::FRAC_PI_4) * p,
            Point::new(0., consts::FRAC_1_SQRT_2, consts::FRAC_1_SQRT_2)
        );
        assert_approx_eq_low_prec!(
            Matrix::rotation_x(consts::FRAC_PI_2) * p,
            Point::new(0., 0., 1.)
        );
        assert_approx_eq_low_prec!(
            Matrix::rotation_x(consts::FRAC_PI_4).inverse() * p,
            Point::new(0., consts::FRAC_1_SQRT_2, -consts::FRAC_1_SQRT_2)
        );
    }

    #[test]
    fn rotation_y() {
        let p = Point::new(0., 0., 1.);

        assert_approx_eq_low_prec!(
            Matrix::rotation_y(consts::FRAC_PI_4) * p,
            Point::new(consts::FRAC_1_SQRT_2, 0., consts::FRAC_1_SQRT_2)
        );
        assert_approx_eq_low_prec!(
            Matrix::rotation_y(consts::FRAC_PI_2) * p,
            Point::new(1., 0., 0.)
        );
    }

    #[test]
    fn rotation_z() {
        let p = Point::new(0., 1., 0.);

        assert_approx_eq_low_prec!(
            Matrix::rotation_z(consts::FRAC_PI_4) * p,
            Point::new(-consts::FRAC_1_SQRT_2, consts::FRAC_1_SQRT_2, 0.)
        );
        assert_approx_eq_low_prec!(
            Matrix::rotation_z(consts::FRAC_PI_2) * p,
            Point::new(-1., 0., 0.)
        );
    }

    #[test]
    fn shearing() {
        let p = Point::new(2., 3., 4.);

        assert_approx_eq_low_prec!(
            Matrix::shearing(1., 0., 0., 0., 0., 0.) * p,
            Point::new(5., 3., 4.)
        );
        assert_approx_eq_low_prec!(
            Matrix::shearing(0., 1., 0., 0., 0., 0.) * p,
            Point::new(6., 3., 4.)
        );
        assert_approx_eq_low_prec!(
            Matrix::shearing(0., 0., 1., 0., 0., 0.) * p,
            Point::new(2., 5., 4.)
        );
        assert_approx_eq_low_prec!(
            Matrix::shearing(0., 0., 0., 1., 0., 0.) * p,
            Point::new(2., 7., 4.)
        );
        assert_approx_eq_low_prec!(
            Matrix::shearing(0., 0., 0., 0., 1., 0.) * p,
            Point::new(2., 3., 6.)
        );
        assert_approx_eq_low_prec!(
            Matrix::shearing(0., 0., 0., 0., 0., 1.) * p,
            Point::new(2., 3., 7.)
        );
    }

    #[test]
    fn transform_normal_ignores_translation() {
        let m = Matrix::translation(1., 2., 3.).transpose();
        assert_approx_eq_low_prec!(
            m.transform_normal(Vector::new(0., 1., 0.)),
            Vector::new(0., 1., 0.)
        );
    }
}
