//! Expression-style multi-way conditional
//!
//! ```
//! use seqkit::to::switch;
//!
//! let size = switch(42)
//!     .case(0, "none")
//!     .when(|n: &i32| *n < 10, "small")
//!     .default("large");
//! assert_eq!(size, "large");
//! ```

/// Start a conditional over `value`.
pub fn switch<T>(value: T) -> Switch<T> {
    Switch { value }
}

/// A conditional with no branch matched yet.
pub struct Switch<T> {
    value: T,
}

impl<T> Switch<T> {
    /// Branch on equality with `expected`.
    pub fn case<R>(self, expected: T, result: R) -> Matching<T, R>
    where
        T: PartialEq,
    {
        Matching::start(self.value).case(expected, result)
    }

    /// Branch on equality with `expected`, computing the result lazily.
    pub fn case_with<R, F>(self, expected: T, result: F) -> Matching<T, R>
    where
        T: PartialEq,
        F: FnOnce() -> R,
    {
        Matching::start(self.value).case_with(expected, result)
    }

    /// Branch on a predicate.
    pub fn when<R, P>(self, predicate: P, result: R) -> Matching<T, R>
    where
        P: FnOnce(&T) -> bool,
    {
        Matching::start(self.value).when(predicate, result)
    }
}

/// A conditional with at least one branch; the first matching branch wins.
pub struct Matching<T, R> {
    value: T,
    result: Option<R>,
}

impl<T, R> Matching<T, R> {
    fn start(value: T) -> Self {
        Self {
            value,
            result: None,
        }
    }

    pub fn case(self, expected: T, result: R) -> Self
    where
        T: PartialEq,
    {
        self.case_with(expected, || result)
    }

    pub fn case_with<F>(mut self, expected: T, result: F) -> Self
    where
        T: PartialEq,
        F: FnOnce() -> R,
    {
        if self.result.is_none() && self.value == expected {
            self.result = Some(result());
        }
        self
    }

    pub fn when<P>(mut self, predicate: P, result: R) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.result.is_none() && predicate(&self.value) {
            self.result = Some(result);
        }
        self
    }

    /// The matched result, or `fallback`.
    pub fn default(self, fallback: R) -> R {
        self.result.unwrap_or(fallback)
    }

    /// The matched result, or a computed fallback.
    pub fn default_with<F>(self, fallback: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        match self.result {
            Some(result) => result,
            None => fallback(&self.value),
        }
    }

    /// The matched result, if any branch matched.
    pub fn result(self) -> crate::optional::Optional<R> {
        self.result.into()
    }
}
