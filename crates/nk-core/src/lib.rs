//! # nk-core
//!
//! Foundational pieces shared by the numkit crates – the primitive type
//! aliases used by the numeric value types, and the [`OptionalBox`]
//! container with its presence-only equality contract.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Optional-value container with an explicit has-value flag.
pub mod optional;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for rational numerators and denominators.
pub type Integer = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use optional::OptionalBox;
