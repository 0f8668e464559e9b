//! Present-or-absent values.
//!
//! [`core::option::Option`] already is the two-variant tagged union this
//! library needs, and every reduction here returns one. This module adds
//! the fallible unwrap used where absence is a caller bug that should be
//! reported as an [`Error`] instead of a panic.

use crate::{Error, Result};

/// A present value.
#[inline]
pub fn of<T>(value: T) -> Option<T> {
    Some(value)
}

/// An absent value.
#[inline]
pub fn none<T>() -> Option<T> {
    None
}

pub trait OptionExt<T> {
    /// The contained value, or [`Error::UnwrapOnNone`].
    fn try_unwrap(self) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn try_unwrap(self) -> Result<T> {
        self.ok_or(Error::UnwrapOnNone)
    }
}
