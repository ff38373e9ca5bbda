//! Reduced rational numbers.
//!
//! A [`Rational`] is always stored in lowest terms with a positive
//! denominator; every arithmetic operation returns a freshly reduced
//! value.  The string grammar is `"a"` or `"a/b"`.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use nk_core::{Integer, Real};
use num_traits::{One, Zero};
use thiserror::Error;

/// Error produced when a rational cannot be parsed from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseRationalError {
    /// The numerator token is not a valid integer.
    #[error("invalid numerator: {0}")]
    Numerator(#[source] ParseIntError),

    /// The denominator token is not a valid integer.
    #[error("invalid denominator: {0}")]
    Denominator(#[source] ParseIntError),
}

/// A rational number in lowest terms.
///
/// The denominator is always positive; the sign lives entirely in the
/// numerator.  Values are immutable – arithmetic returns new instances,
/// each reduced on construction.
///
/// # Examples
/// ```
/// use nk_rational::Rational;
///
/// let a = Rational::new(6, 8);
/// assert_eq!(a, Rational::new(3, 4));
///
/// let sum = Rational::new(1, 3) + Rational::new(1, 6);
/// assert_eq!(sum, Rational::new(1, 2));
///
/// let parsed: Rational = "7/3".parse().unwrap();
/// assert_eq!(parsed.to_string(), "2 1/3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    num: Integer,
    den: Integer,
}

/// Greatest common divisor by Euclid's algorithm; `gcd(0, d) == d`.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Rational {
    /// Create a rational from a numerator and denominator, reduced to
    /// lowest terms.
    ///
    /// A negative denominator is normalised away by negating both parts,
    /// so the stored denominator is always positive.
    ///
    /// # Panics
    /// Panics if `den` is zero.  A zero denominator is a programming
    /// error, not a recoverable condition.
    ///
    /// # Examples
    /// ```
    /// use nk_rational::Rational;
    ///
    /// let r = Rational::new(-2, -4);
    /// assert_eq!(r.numerator(), 1);
    /// assert_eq!(r.denominator(), 2);
    /// ```
    pub fn new(num: Integer, den: Integer) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        // Sign lives in the numerator.
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as Integer;
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// The (signed) numerator.
    pub fn numerator(&self) -> Integer {
        self.num
    }

    /// The (always positive) denominator.
    pub fn denominator(&self) -> Integer {
        self.den
    }

    /// The value as a floating-point number.
    ///
    /// # Examples
    /// ```
    /// use nk_rational::Rational;
    /// assert_eq!(Rational::new(1, 4).to_real(), 0.25);
    /// ```
    pub fn to_real(&self) -> Real {
        self.num as Real / self.den as Real
    }

    /// Add `rhs` (a rational or an integer) to `self`.
    pub fn add(self, rhs: impl Into<Rational>) -> Self {
        let r = rhs.into();
        Self::new(self.num * r.den + self.den * r.num, self.den * r.den)
    }

    /// Subtract `rhs` (a rational or an integer) from `self`.
    pub fn subtract(self, rhs: impl Into<Rational>) -> Self {
        let r = rhs.into();
        Self::new(self.num * r.den - self.den * r.num, self.den * r.den)
    }

    /// Multiply `self` by `rhs` (a rational or an integer).
    pub fn multiply(self, rhs: impl Into<Rational>) -> Self {
        let r = rhs.into();
        Self::new(self.num * r.num, self.den * r.den)
    }

    /// Divide `self` by `rhs` (a rational or an integer).
    ///
    /// # Panics
    /// Panics if `rhs` is zero – the quotient's denominator would be
    /// zero, which trips the construction-time check.
    pub fn divide(self, rhs: impl Into<Rational>) -> Self {
        let r = rhs.into();
        Self::new(self.num * r.den, self.den * r.num)
    }
}

impl Default for Rational {
    /// The zero rational, `0/1`.
    fn default() -> Self {
        Self { num: 0, den: 1 }
    }
}

impl From<Integer> for Rational {
    /// A whole number `n/1`.
    fn from(n: Integer) -> Self {
        Self { num: n, den: 1 }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                /// A whole number `n/1`.
                fn from(n: $t) -> Self {
                    Self { num: Integer::from(n), den: 1 }
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, u8, u16, u32);

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parse `"a"` or `"a/b"`.
    ///
    /// The token before `/` is the numerator; the token after it, if
    /// present, is the denominator (default 1).  A token that is not a
    /// valid integer yields a [`ParseRationalError`].  A literal zero
    /// denominator parses and then panics in [`Rational::new`] – the same
    /// contract violation as direct construction.
    ///
    /// # Examples
    /// ```
    /// use nk_rational::Rational;
    ///
    /// assert_eq!("3/4".parse::<Rational>().unwrap(), Rational::new(3, 4));
    /// assert_eq!("5".parse::<Rational>().unwrap(), Rational::from(5));
    /// assert!("a/b".parse::<Rational>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.splitn(2, '/');
        let num = tokens
            .next()
            .unwrap_or_default()
            .parse::<Integer>()
            .map_err(ParseRationalError::Numerator)?;
        let den = match tokens.next() {
            Some(tok) => tok
                .parse::<Integer>()
                .map_err(ParseRationalError::Denominator)?,
            None => 1,
        };
        Ok(Self::new(num, den))
    }
}

impl Display for Rational {
    /// Render as `"0"`, a whole number, a mixed number, or `"n/d"`.
    ///
    /// The mixed-number branch fires only when the numerator strictly
    /// exceeds the denominator (after reduction); negative improper
    /// fractions keep the plain `"n/d"` form.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.num == 0 {
            write!(f, "0")
        } else if self.den == 1 {
            write!(f, "{}", self.num)
        } else if self.num > self.den {
            write!(f, "{} {}/{}", self.num / self.den, self.num % self.den, self.den)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl<T: Into<Rational>> Add<T> for Rational {
    type Output = Rational;

    fn add(self, rhs: T) -> Rational {
        Rational::add(self, rhs)
    }
}

impl<T: Into<Rational>> Sub<T> for Rational {
    type Output = Rational;

    fn sub(self, rhs: T) -> Rational {
        self.subtract(rhs)
    }
}

impl<T: Into<Rational>> Mul<T> for Rational {
    type Output = Rational;

    fn mul(self, rhs: T) -> Rational {
        self.multiply(rhs)
    }
}

impl<T: Into<Rational>> Div<T> for Rational {
    type Output = Rational;

    fn div(self, rhs: T) -> Rational {
        self.divide(rhs)
    }
}

macro_rules! impl_int_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Add<Rational> for $t {
                type Output = Rational;

                fn add(self, rhs: Rational) -> Rational {
                    Rational::from(self).add(rhs)
                }
            }

            impl Sub<Rational> for $t {
                type Output = Rational;

                fn sub(self, rhs: Rational) -> Rational {
                    Rational::from(self).subtract(rhs)
                }
            }

            impl Mul<Rational> for $t {
                type Output = Rational;

                fn mul(self, rhs: Rational) -> Rational {
                    Rational::from(self).multiply(rhs)
                }
            }

            impl Div<Rational> for $t {
                type Output = Rational;

                fn div(self, rhs: Rational) -> Rational {
                    Rational::from(self).divide(rhs)
                }
            }
        )*
    };
}

impl_int_lhs_ops!(i32, i64);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from(1)
    }
}
