use std::ops;

use super::approx_eq::ApproxEq;

/// Linear RGB light value. Channels are not clamped until quantization.
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }
    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }
    pub fn green() -> Self {
        Self::new(0., 1., 0.)
    }
    pub fn blue() -> Self {
        Self::new(0., 0., 1.)
    }
    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn b(&self) -> f64 {
        self.b
    }

    /// `<= 0` maps to 0, `>= 1` maps to 255, anything in between to `round(v * 255)`.
    pub fn quantize_channel(v: f64) -> u8 {
        let v = v.clamp(0., 1.);
        (v * 255.).round() as u8
    }

    pub fn as_u8_rgb(&self) -> [u8; 3] {
        [
            Self::quantize_channel(self.r),
            Self::quantize_channel(self.g),
            Self::quantize_channel(self.b),
        ]
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.r.approx_eq_epsilon(&other.r, epsilon)
            && self.g.approx_eq_epsilon(&other.g, epsilon)
            && self.b.approx_eq_epsilon(&other.b, epsilon)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

/// Hadamard product, used to filter light through a surface color.
impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}
