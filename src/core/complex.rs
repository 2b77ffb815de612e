//! Complex scalar value type.
//!
//! Equality compares the raw bit patterns of both components. Two values that
//! differ only by the sign of a zero are *not* equal, and `NaN` equals itself.
//! Zero-divisor checks and interference detection rely on this exact
//! comparison, so tolerance-based checks must go through [`Complex::approx_eq`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::core::error::{MathError, MathResult};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    // Magnitude of the complex number
    pub fn modulus(self) -> f64 {
        (self.re.powi(2) + self.im.powi(2)).sqrt()
    }

    // Phase (angle) in radians
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    pub fn sub(self, other: Complex) -> Complex {
        self.add(other.additive_inverse())
    }

    pub fn mult(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    pub fn div(self, other: Complex) -> MathResult<Complex> {
        if other.re == 0.0 && other.im == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        let denominator = other.re.powi(2) + other.im.powi(2);
        Ok(Complex::new(
            (self.re * other.re + self.im * other.im) / denominator,
            (other.re * self.im - self.re * other.im) / denominator,
        ))
    }

    // Negation subtracts from +0.0 so that the inverse of a zero component is
    // +0.0 again; under bit equality `-0.0` would break `adjoint(m) == m`.
    pub fn conjugate(self) -> Complex {
        Complex::new(self.re, 0.0 - self.im)
    }

    pub fn additive_inverse(self) -> Complex {
        Complex::new(0.0 - self.re, 0.0 - self.im)
    }

    /// Repackages the value as `(modulus, phase)` in the same scalar type.
    pub fn cartesian_to_polar(self) -> Complex {
        Complex::new(self.modulus(), self.phase())
    }

    /// Reads `re` as the radius and `im` as the angle.
    pub fn polar_to_cartesian(self) -> Complex {
        Complex::new(self.re * self.im.cos(), self.re * self.im.sin())
    }

    /// Exact, bit-for-bit comparison of both components.
    pub fn equals(self, other: Complex) -> bool {
        self.re.to_bits() == other.re.to_bits() && self.im.to_bits() == other.im.to_bits()
    }

    pub fn approx_eq(self, other: Complex, eps: f64) -> bool {
        (self.re - other.re).abs() <= eps && (self.im - other.im).abs() <= eps
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.re.to_bits().hash(state);
        self.im.to_bits().hash(state);
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(c: Complex) -> Self {
        (c.re, c.im)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::sub(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        self.mult(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        self.additive_inverse()
    }
}

/// `a + bi`, or `a-bi` when the imaginary part is negative.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{} + {}i", real(self.re), real(self.im))
        } else {
            write!(f, "{}{}i", real(self.re), real(self.im))
        }
    }
}

/// Shortest round-trip decimal with at least one fractional digit (`1.0`, `-0.5`).
pub(crate) fn real(x: f64) -> String {
    format!("{:?}", x)
}
