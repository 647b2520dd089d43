pub const EPSILON: f64 = 1.0e-5;
pub const LOW_PREC_EPSILON: f64 = 1.0e-4;

pub trait ApproxEq<Rhs: ?Sized = Self> {
    fn approx_eq_epsilon(&self, other: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }

    fn approx_eq_low_prec(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

impl<T: ApproxEq + ?Sized> ApproxEq for &T {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        (**self).approx_eq_epsilon(*other, epsilon)
    }
}

/// Asserts that two values are equal within `LOW_PREC_EPSILON`.
#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !$crate::math::approx_eq::ApproxEq::approx_eq_low_prec(left_val, right_val) {
                    panic!(
                        "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                        left_val, right_val
                    );
                }
            }
        }
    };
}
