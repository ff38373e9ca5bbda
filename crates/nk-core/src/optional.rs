//! Optional-value container with presence-only equality.
//!
//! [`OptionalBox`] wraps a value together with an explicit has-value flag.
//! Unlike `Option`, equality between two boxes compares only *presence*:
//! two boxes are equal when both hold a value or both are empty, and the
//! payloads themselves are never consulted.  `==` therefore answers
//! "is this box set", not "do these boxes hold equal values".

use std::fmt::{self, Display, Formatter};

/// A payload (or nothing) behind an explicit has-value flag.
///
/// The canonical way to express "no value" is the shared
/// [`OptionalBox::NONE`] constant; the empty state cannot be built any
/// other way.  Unwrapping an empty box is a contract violation and
/// aborts, so callers are expected to check [`has_value`] first.
///
/// [`has_value`]: OptionalBox::has_value
///
/// # Examples
/// ```
/// use nk_core::OptionalBox;
///
/// let full = OptionalBox::new(42);
/// let empty: OptionalBox<i32> = OptionalBox::NONE;
///
/// assert!(full.has_value());
/// assert_ne!(full, empty);
/// assert_eq!(full.unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptionalBox<T> {
    value: Option<T>,
}

impl<T> OptionalBox<T> {
    /// The shared empty box.
    pub const NONE: Self = Self { value: None };

    /// Wrap `value` in an occupied box.
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Return `true` if this box holds a value.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Return the wrapped payload.
    ///
    /// # Panics
    /// Panics if the box is empty.  An empty box must never be unwrapped;
    /// this is a programming error, not a recoverable condition.
    pub fn unwrap(self) -> T {
        match self.value {
            Some(v) => v,
            None => panic!("cannot unwrap an empty OptionalBox"),
        }
    }
}

impl<T> PartialEq for OptionalBox<T> {
    /// Presence-only equality.
    ///
    /// Two boxes are equal iff both hold a value or both are empty.
    /// Payload contents are deliberately ignored.
    fn eq(&self, other: &Self) -> bool {
        self.has_value() == other.has_value()
    }
}

impl<T> Eq for OptionalBox<T> {}

impl<T: Display> Display for OptionalBox<T> {
    /// `"OptionalBox({payload})"` for an occupied box, `"nil"` otherwise.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "OptionalBox({v})"),
            None => write!(f, "nil"),
        }
    }
}
