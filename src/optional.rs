//! A value-or-absent container returned by lookups that may find nothing
//!
//! [`Optional`] distinguishes "absent" from "present with the default value";
//! presence is an explicit state, never inferred by comparing against a zero
//! value. Nullable inputs go through [`Optional::of_option`] or
//! [`Optional::of_ptr`], which collapse `None` to absent, while
//! [`Optional::of`] always produces a present value.

use std::fmt;

use crate::error::{Error, Result};
use crate::seq::{from_iter, FromIter};

/// Zero or one value of type `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// An absent optional.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// A present optional holding `value`.
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Present when `value` is `Some`, absent otherwise.
    pub fn of_option(value: Option<T>) -> Self {
        Self { value }
    }

    /// Copy the referenced value if there is one; `None` yields an absent optional.
    pub fn of_ptr(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self {
            value: value.cloned(),
        }
    }

    /// Present unless `value` equals `T::default()`.
    ///
    /// Only suitable when the default is never a legitimate present value.
    pub fn of_non_zero(value: T) -> Self
    where
        T: Default + PartialEq,
    {
        if value == T::default() {
            Self::empty()
        } else {
            Self::of(value)
        }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_not_empty(&self) -> bool {
        self.is_present()
    }

    /// Return the value.
    ///
    /// # Panics
    ///
    /// Panics with "value is not present" when empty.
    #[track_caller]
    pub fn must_get(self) -> T {
        match self.value {
            Some(value) => value,
            None => panic!("{}", Error::ValueNotPresent),
        }
    }

    /// Return the value, panicking with `message` when empty.
    #[track_caller]
    pub fn must_get_with_message(self, message: impl fmt::Display) -> T {
        match self.value {
            Some(value) => value,
            None => panic!("{}", message),
        }
    }

    /// Return the value, or [`Error::ValueNotPresent`].
    pub fn should_get(self) -> Result<T> {
        self.value.ok_or(Error::ValueNotPresent)
    }

    pub fn get_or_else(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Return the value, or compute a default. `f` runs only when empty.
    pub fn get_or_compute<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(f)
    }

    pub fn get_or_zero_value(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Return the value, or `err` when empty.
    pub fn get_or_error<E>(self, err: E) -> std::result::Result<T, E> {
        self.value.ok_or(err)
    }

    /// Return the value, or a computed error. `f` runs only when empty.
    pub fn get_or_compute_error<E, F>(self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(f)
    }

    /// `self` if present, `alternative` otherwise.
    pub fn or(self, alternative: Optional<T>) -> Optional<T> {
        if self.is_present() {
            self
        } else {
            alternative
        }
    }

    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            f(value);
        }
    }

    pub fn if_absent<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.value.is_none() {
            f();
        }
    }

    /// Transform the value if present; `f` is not called otherwise.
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        Optional {
            value: self.value.map(f),
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// A sequence of the one contained value, or of nothing.
    pub fn to_seq(self) -> FromIter<Option<T>>
    where
        T: Clone,
    {
        from_iter(self.value)
    }

    /// An error-propagating sequence of one element: the value, or
    /// [`Error::ValueNotPresent`] when empty.
    pub fn to_try_seq(self) -> FromIter<Option<Result<T>>>
    where
        T: Clone,
    {
        from_iter(Some(self.should_get()))
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_option(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}
