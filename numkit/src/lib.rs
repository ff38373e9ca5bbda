//! # numkit
//!
//! Arithmetic value types: reduced rationals, complex numbers, and an
//! explicit optional box.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `nk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! numkit = "0.1"
//! ```
//!
//! ```rust
//! use numkit::rational::Rational;
//!
//! let half = Rational::new(1, 3) + Rational::new(1, 6);
//! assert_eq!(half.to_string(), "1/2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Primitive type aliases and the `OptionalBox` container.
pub use nk_core as core;

/// The `Rational` value type.
pub use nk_rational as rational;

/// The `Complex` value type.
pub use nk_complex as complex;
