//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. `Either` is right-biased:
//! `map`, `flat_map` and `get_or_else` act on `Right`, the primary channel,
//! and pass `Left` through untouched. A `Left` is not necessarily an error;
//! it is the other kind of valid result, such as a rejected input.
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::{Either, Optional};
//!
//! // Optional -> Either -> parse, with no nested container along the way.
//! let age: Either<String, u32> = Optional::present("42".to_string())
//!     .to_either_with(|| "empty".to_string())
//!     .flat_map(|text| Either::parse(&text));
//! assert_eq!(age, Either::Right(42));
//!
//! let rejected: Either<String, u32> = Optional::present("forty".to_string())
//!     .to_either_with(|| "empty".to_string())
//!     .flat_map(|text| Either::parse(&text));
//! assert_eq!(rejected, Either::Left("forty".to_string()));
//! ```

use std::fmt;
use std::str::FromStr;

use super::attempt::{Attempt, AttemptError, BoxError};
use super::optional::Optional;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`,
/// never both and never neither. By convention `Right` carries the primary
/// (successful) result.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// let failure: Either<String, i32> = Either::left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the alternative outcome.
    Left(L),
    /// The right variant, conventionally the primary outcome.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<L>`, discarding a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.left_value(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.left_value(), None);
    /// ```
    #[inline]
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a left value.
    #[inline]
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value; a `Left` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map(|s| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value; a `Right` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a function that itself returns an `Either`.
    ///
    /// A `Left` short-circuits: `function` is not invoked and the left value
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(5);
    /// assert_eq!(right.flat_map(|v| Either::right(v + 1)), Either::right(6));
    ///
    /// let left: Either<&str, i32> = Either::left("e");
    /// assert_eq!(left.flat_map(|v| Either::right(v + 1)), Either::left("e"));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Turns a `Right` that fails `predicate` into a `Left`.
    ///
    /// `zero` builds the left value from the rejected right value; it runs
    /// only on rejection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let adult: Either<String, u32> = Either::right(30);
    /// let child: Either<String, u32> = Either::right(12);
    /// let check = |age: &u32| *age >= 18;
    /// let reason = |age: u32| format!("{age} is under 18");
    ///
    /// assert_eq!(adult.filter_or_else(check, reason), Either::Right(30));
    /// assert_eq!(child.filter_or_else(check, reason), Either::Left("12 is under 18".to_string()));
    /// ```
    #[inline]
    pub fn filter_or_else<P, Z>(self, predicate: P, zero: Z) -> Self
    where
        P: FnOnce(&R) -> bool,
        Z: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(zero(value))
                }
            }
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Extraction and Recovery
    // =========================================================================

    /// Returns the right value or `default`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value or one computed from the left value.
    #[inline]
    pub fn get_or_else_with<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }

    /// Returns `self` if it is a `Right`, otherwise the alternative built
    /// from the left value.
    #[inline]
    pub fn or_else<T, F>(self, alternative: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => alternative(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs a side effect on the right value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a side effect on the left value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn peek_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Optional`, discarding a left value.
    #[inline]
    pub fn to_optional(self) -> Optional<R> {
        match self {
            Self::Left(_) => Optional::Absent,
            Self::Right(value) => Optional::Present(value),
        }
    }

    /// Converts into an `Attempt`, treating the left value as the error.
    #[inline]
    pub fn to_attempt(self) -> Attempt<R>
    where
        L: Into<BoxError>,
    {
        match self {
            Self::Left(value) => Attempt::Failure(AttemptError::new(value)),
            Self::Right(value) => Attempt::Success(value),
        }
    }

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<T> Either<String, T>
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    /// Parses `input`, keeping the original input as the left value when
    /// parsing fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    ///
    /// assert_eq!(Either::<String, i32>::parse("42"), Either::Right(42));
    /// assert_eq!(Either::<String, i32>::parse("4x2"), Either::Left("4x2".to_string()));
    /// ```
    pub fn parse(input: &str) -> Self {
        Attempt::of(|| input.parse::<T>())
            .to_either()
            .map_left(|_| input.to_owned())
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From / IntoIterator Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right_value().into_iter()
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Either<u8, i32>: Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    #[case("7", Either::Right(7))]
    #[case("", Either::Left(String::new()))]
    #[case("seven", Either::Left("seven".to_string()))]
    fn test_parse_keeps_input_on_failure(#[case] input: &str, #[case] expected: Either<String, u8>) {
        assert_eq!(Either::parse(input), expected);
    }

    #[rstest]
    fn test_left_into_attempt_keeps_message() {
        let either: Either<&str, i32> = Either::left("rejected");
        assert_eq!(
            either.to_attempt().error().map(AttemptError::message),
            Some("rejected".to_string())
        );
    }
}
