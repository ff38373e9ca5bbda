//! # nk-complex
//!
//! The [`Complex`] value type: a real/imaginary pair over
//! [`nk_core::Real`] with component-wise and product/quotient arithmetic.
//!
//! Two deliberate departures from textbook complex numbers are part of
//! the contract: [`Complex::magnitude`] is the *squared* modulus (the
//! division formula depends on it), and the string grammar covers only
//! pure-real and pure-imaginary forms.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Complex` type and its string-parsing error.
pub mod complex;

pub use complex::{Complex, ParseComplexError};
