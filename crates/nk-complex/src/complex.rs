//! Complex numbers.
//!
//! The string grammar is `"a"` (pure real) or `"ai"` (pure imaginary);
//! a combined `"a+bi"` form is not expressible and is not accepted.

use std::fmt::{self, Display, Formatter};
use std::num::ParseFloatError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use nk_core::Real;
use num_traits::{One, Zero};
use thiserror::Error;

/// Error produced when a complex number cannot be parsed from a string.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseComplexError {
    /// The real-part token is not a valid floating-point number.
    #[error("invalid real part: {0}")]
    RealPart(#[source] ParseFloatError),

    /// The imaginary-part token is not a valid floating-point number.
    #[error("invalid imaginary part: {0}")]
    ImaginaryPart(#[source] ParseFloatError),
}

/// A complex number over [`Real`] parts.
///
/// Fields are public and freely mutable; arithmetic nevertheless returns
/// new instances rather than updating in place.
///
/// # Examples
/// ```
/// use nk_complex::Complex;
///
/// let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
/// assert_eq!(product, Complex::new(-5.0, 10.0));
///
/// let pure_imag: Complex = "3i".parse().unwrap();
/// assert_eq!(pure_imag, Complex::new(0.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real part.
    pub real: Real,
    /// Imaginary part.
    pub imag: Real,
}

impl Complex {
    /// Create a complex number from its real and imaginary parts.
    pub fn new(real: Real, imag: Real) -> Self {
        Self { real, imag }
    }

    /// The squared modulus, `re² + im²`.
    ///
    /// Deliberately *not* the Euclidean modulus; [`Complex::divide`]
    /// depends on this exact value.
    ///
    /// # Examples
    /// ```
    /// use nk_complex::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).magnitude(), 25.0);
    /// ```
    pub fn magnitude(&self) -> Real {
        self.real * self.real + self.imag * self.imag
    }

    /// Add `rhs` (a complex number or a scalar) to `self`, component-wise.
    pub fn add(self, rhs: impl Into<Complex>) -> Self {
        let c = rhs.into();
        Self::new(self.real + c.real, self.imag + c.imag)
    }

    /// Subtract `rhs` (a complex number or a scalar) from `self`,
    /// component-wise.
    pub fn subtract(self, rhs: impl Into<Complex>) -> Self {
        let c = rhs.into();
        Self::new(self.real - c.real, self.imag - c.imag)
    }

    /// Multiply `self` by `rhs` via `(ac − bd, ad + bc)`.
    pub fn multiply(self, rhs: impl Into<Complex>) -> Self {
        let c = rhs.into();
        Self::new(
            self.real * c.real - self.imag * c.imag,
            self.real * c.imag + self.imag * c.real,
        )
    }

    /// Divide `self` by `rhs` via `((ac+bd)/m, (bc−ad)/m)` where `m` is
    /// the divisor's squared magnitude.
    ///
    /// There is no zero-divisor guard: dividing by a zero-magnitude
    /// complex number yields IEEE infinities or NaNs.
    pub fn divide(self, rhs: impl Into<Complex>) -> Self {
        let c = rhs.into();
        let m = c.magnitude();
        Self::new(
            (self.real * c.real + self.imag * c.imag) / m,
            (self.imag * c.real - self.real * c.imag) / m,
        )
    }
}

impl From<Real> for Complex {
    /// A scalar as a complex number with zero imaginary part.
    fn from(x: Real) -> Self {
        Self::new(x, 0.0)
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    /// Parse `"a"` (pure real) or `"ai"` (pure imaginary).
    ///
    /// Without an `i` the whole string parses as the real part; with one,
    /// the token preceding it parses as the imaginary part and the real
    /// part is zero.  The grammar cannot express a number with both
    /// nonzero parts – that limitation is part of the contract.
    ///
    /// # Examples
    /// ```
    /// use nk_complex::Complex;
    ///
    /// assert_eq!("3".parse::<Complex>().unwrap(), Complex::new(3.0, 0.0));
    /// assert_eq!("3i".parse::<Complex>().unwrap(), Complex::new(0.0, 3.0));
    /// assert!("xi".parse::<Complex>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('i') {
            None => {
                let re = s.parse::<Real>().map_err(ParseComplexError::RealPart)?;
                Ok(Self::new(re, 0.0))
            }
            Some((head, _)) => {
                let im = head
                    .parse::<Real>()
                    .map_err(ParseComplexError::ImaginaryPart)?;
                Ok(Self::new(0.0, im))
            }
        }
    }
}

impl Display for Complex {
    /// `"{re}+{im}i"` when the imaginary part is positive, otherwise
    /// `"{re}{im}i"` – a negative imaginary part carries its own minus
    /// sign, and a zero one renders as `"{re}0i"`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.imag > 0.0 {
            write!(f, "{}+{}i", self.real, self.imag)
        } else {
            write!(f, "{}{}i", self.real, self.imag)
        }
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Complex;

    fn add(self, rhs: T) -> Complex {
        Complex::add(self, rhs)
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Complex;

    fn sub(self, rhs: T) -> Complex {
        self.subtract(rhs)
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Complex;

    fn mul(self, rhs: T) -> Complex {
        self.multiply(rhs)
    }
}

impl<T: Into<Complex>> Div<T> for Complex {
    type Output = Complex;

    fn div(self, rhs: T) -> Complex {
        self.divide(rhs)
    }
}

impl Add<Complex> for Real {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::from(self).add(rhs)
    }
}

impl Sub<Complex> for Real {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::from(self).subtract(rhs)
    }
}

impl Mul<Complex> for Real {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::from(self).multiply(rhs)
    }
}

impl Div<Complex> for Real {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        Complex::from(self).divide(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.real, -self.imag)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn magnitude_is_squared_modulus() {
        // 3² + 4² = 25, not 5.
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 25.0);
    }

    #[test]
    fn add_and_subtract_are_component_wise() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -4.0);
        assert_eq!(a + b, Complex::new(4.0, -2.0));
        assert_eq!(a - b, Complex::new(-2.0, 6.0));
    }

    #[test]
    fn multiply_follows_product_formula() {
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn divide_uses_squared_magnitude() {
        // (1+2i)(3+4i) / (3+4i) should recover 1+2i.
        let quotient = Complex::new(-5.0, 10.0) / Complex::new(3.0, 4.0);
        assert_relative_eq!(quotient.real, 1.0);
        assert_relative_eq!(quotient.imag, 2.0);
    }

    #[test]
    fn divide_by_zero_magnitude_is_not_guarded() {
        let q = Complex::new(1.0, 1.0) / Complex::default();
        assert!(q.real.is_infinite() || q.real.is_nan());
        assert!(q.imag.is_infinite() || q.imag.is_nan());
    }

    #[test]
    fn scalar_operands() {
        let c = Complex::new(1.0, 2.0);
        assert_eq!(c + 2.0, Complex::new(3.0, 2.0));
        assert_eq!(c - 2.0, Complex::new(-1.0, 2.0));
        assert_eq!(c * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(c / 2.0, Complex::new(0.5, 1.0));
        assert_eq!(2.0 + c, Complex::new(3.0, 2.0));
        assert_eq!(2.0 * c, Complex::new(2.0, 4.0));
    }

    #[test]
    fn parse_pure_real() {
        assert_eq!("3".parse::<Complex>().unwrap(), Complex::new(3.0, 0.0));
        assert_eq!("-2.5".parse::<Complex>().unwrap(), Complex::new(-2.5, 0.0));
    }

    #[test]
    fn parse_pure_imaginary() {
        assert_eq!("3i".parse::<Complex>().unwrap(), Complex::new(0.0, 3.0));
        assert_eq!("-1.5i".parse::<Complex>().unwrap(), Complex::new(0.0, -1.5));
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert!("xi".parse::<Complex>().is_err());
        assert!("abc".parse::<Complex>().is_err());
        assert!("i".parse::<Complex>().is_err());
    }

    #[test]
    fn parse_error_identifies_the_bad_token() {
        assert!(matches!(
            "abc".parse::<Complex>(),
            Err(ParseComplexError::RealPart(_))
        ));
        assert!(matches!(
            "xi".parse::<Complex>(),
            Err(ParseComplexError::ImaginaryPart(_))
        ));
    }

    #[test]
    fn display_positive_imaginary_gets_plus() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3+4i");
    }

    #[test]
    fn display_negative_imaginary_carries_own_sign() {
        assert_eq!(Complex::new(3.0, -4.0).to_string(), "3-4i");
    }

    #[test]
    fn display_zero_imaginary_keeps_the_i() {
        assert_eq!(Complex::new(3.0, 0.0).to_string(), "30i");
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Complex::default(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn zero_and_one() {
        assert!(Complex::zero().is_zero());
        assert_eq!(Complex::one() * Complex::new(2.0, 3.0), Complex::new(2.0, 3.0));
    }
}
