//! Rendering helpers shared by the entity `Display` implementations.

use std::collections::BTreeSet;
use std::fmt;

/// Marker rendered in place of an absent field.
pub const ABSENT: &str = "<none>";

/// Displays an optional value, or [`ABSENT`] when it is missing.
pub(crate) struct Maybe<'a, T: ?Sized>(pub(crate) Option<&'a T>);

impl<T: fmt::Display + ?Sized> fmt::Display for Maybe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(ABSENT),
        }
    }
}

/// Displays a set as `{a, b, c}` in the set's iteration order.
pub(crate) struct SetOf<'a, T>(pub(crate) &'a BTreeSet<T>);

impl<T: fmt::Display> fmt::Display for SetOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, item) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            item.fmt(f)?;
        }
        f.write_str("}")
    }
}
