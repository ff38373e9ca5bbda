//! # nk-rational
//!
//! The [`Rational`] value type: an immutable numerator/denominator pair
//! over [`nk_core::Integer`], kept in lowest terms with the sign carried
//! by the numerator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Rational` type and its string-parsing error.
pub mod rational;

pub use rational::{ParseRationalError, Rational};
