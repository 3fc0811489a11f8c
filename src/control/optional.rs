//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which represents either a
//! `Present(T)` value or `Absent`. Absence is an expected state, not an
//! error: every combinator handles it by skipping the supplied function.
//!
//! # Chaining
//!
//! `map` and `flat_map` are deliberately distinct. Passing a function that
//! itself returns an `Optional` to `map` produces `Optional<Optional<U>>`;
//! such functions belong in `flat_map`, which returns the inner container
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::Optional;
//!
//! fn lookup(key: &str) -> Optional<i32> {
//!     Optional::of((key == "answer").then_some(42))
//! }
//!
//! let result = Optional::present("answer")
//!     .flat_map(lookup)
//!     .filter(|value| *value > 10)
//!     .map(|value| value * 2)
//!     .get_or_else(0);
//! assert_eq!(result, 84);
//! ```

use std::fmt;

use super::attempt::{Attempt, AttemptError};
use super::either::Either;

/// A value that is either `Present` or `Absent`.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Optional;
///
/// let present = Optional::of(Some("hello"));
/// let absent: Optional<&str> = Optional::of(None);
///
/// assert_eq!(present.map(str::len), Optional::Present(5));
/// assert_eq!(absent.map(str::len), Optional::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A contained value.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds an `Optional` from a raw value that may be missing.
    ///
    /// `None` becomes `Absent`, `Some(value)` becomes `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// assert_eq!(Optional::of(Some(1)), Optional::Present(1));
    /// assert_eq!(Optional::<i32>::of(None), Optional::Absent);
    /// ```
    #[inline]
    pub fn of(raw: Option<T>) -> Self {
        match raw {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Wraps a value that is known to exist.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the empty `Optional`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Borrows the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let value = Optional::present(String::from("hello"));
    /// assert_eq!(value.get(), Some(&String::from("hello")));
    /// ```
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// If this is `Absent`, the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let lowered = Optional::present("HeLLo").map(str::to_lowercase);
    /// assert_eq!(lowered, Optional::Present("hello".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chains a function that itself returns an `Optional`.
    ///
    /// The result of `function` is returned as is, never re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// fn only_abc(text: &str) -> Optional<&str> {
    ///     if text == "ABC" { Optional::present(text) } else { Optional::absent() }
    /// }
    ///
    /// assert_eq!(Optional::present("ABC").flat_map(only_abc), Optional::Present("ABC"));
    /// assert_eq!(Optional::present("XYZ").flat_map(only_abc), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Alias for [`Optional::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.flat_map(function)
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let starts_with_lol = |text: &&str| text.starts_with("LOL");
    /// assert_eq!(Optional::present("LOL!").filter(starts_with_lol), Optional::Present("LOL!"));
    /// assert_eq!(Optional::present("nope").filter(starts_with_lol), Optional::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one.
    ///
    /// `supplier` runs only when the value is absent.
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns the contained value, or the supplied error as `Err`.
    ///
    /// This is the one extraction that turns absence into an error, and it
    /// does so only because the caller asks for it.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_supplier())` if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let missing: Optional<&str> = Optional::absent();
    /// let error = missing.get_or_else_throw(|| "don't like absent values");
    /// assert_eq!(error, Err("don't like absent values"));
    /// ```
    #[inline]
    pub fn get_or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error_supplier()),
        }
    }

    /// Returns `self` if present, otherwise the lazily built alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let value = Optional::of(None)
    ///     .or_else(|| Optional::of(Some("default")))
    ///     .get_or_else("fallback");
    /// assert_eq!(value, "default");
    /// ```
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    /// Eliminates the `Optional` by applying one of two functions.
    #[inline]
    pub fn fold<U, A, P>(self, if_absent: A, if_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => if_present(value),
            Self::Absent => if_absent(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs a side effect on the contained value and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::present(3).peek(|v| seen.push(*v));
    /// assert_eq!(value, Optional::Present(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a side effect if the value is absent and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    /// Consumes the `Optional`, running `action` on the value if present.
    #[inline]
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Either`, using `left` when the value is absent.
    ///
    /// `left` is already built by the caller; use
    /// [`Optional::to_either_with`] when building it has a cost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::{Either, Optional};
    ///
    /// assert_eq!(Optional::present(5).to_either("empty"), Either::Right(5));
    /// assert_eq!(Optional::<i32>::absent().to_either("empty"), Either::Left("empty"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(left),
        }
    }

    /// Converts into an `Either`, building the left value only when absent.
    #[inline]
    pub fn to_either_with<L, F>(self, left_supplier: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(left_supplier()),
        }
    }

    /// Converts into an `Attempt`; absence becomes a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let attempt = Optional::<i32>::absent().to_attempt();
    /// assert_eq!(attempt.error().map(|error| error.message()), Some("no value present".to_string()));
    /// ```
    #[inline]
    pub fn to_attempt(self) -> Attempt<T> {
        match self {
            Self::Present(value) => Attempt::Success(value),
            Self::Absent => Attempt::Failure(AttemptError::msg("no value present")),
        }
    }

    /// Returns an iterator over the contained value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Collapses one level of nesting.
    ///
    /// Nested optionals are never collapsed implicitly; this is the explicit
    /// repair for a `map` that should have been a `flat_map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let nested = Optional::present(Optional::present(1));
    /// assert_eq!(nested.flatten(), Optional::Present(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From / IntoIterator Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(raw: Option<T>) -> Self {
        Self::of(raw)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the value if present, so a sequence of optionals can be
    /// flattened with ordinary iterator adapters.
    ///
    /// ```rust
    /// use vessel::control::Optional;
    ///
    /// let values = vec![Optional::present("A"), Optional::absent(), Optional::present("C")];
    /// let lowered: Vec<String> = values.into_iter().flatten().map(str::to_lowercase).collect();
    /// assert_eq!(lowered, vec!["a", "c"]);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Optional<String>: Send, Sync);
