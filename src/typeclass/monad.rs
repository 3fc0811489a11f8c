//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::Optional;
//! use vessel::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::of(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Monad::flat_map(Optional::present("42"), parse_positive);
//! assert_eq!(result, Optional::Present(42));
//! ```

use super::applicative::Applicative;
use crate::control::{Attempt, Either, Optional};

/// A type class for types that support sequencing of computations.
///
/// Each container's inherent `flat_map` already satisfies the laws; the
/// trait exists so they can be stated and checked once for all of them.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is empty, failed or left, that state propagates and `next`
    /// is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    /// use vessel::typeclass::Monad;
    ///
    /// assert_eq!(Optional::present(5).then(Optional::present("hello")), Optional::Present("hello"));
    /// assert_eq!(Optional::<i32>::absent().then(Optional::present("hello")), Optional::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Attempt<A> Implementation
// =============================================================================

impl<A> Monad for Attempt<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> Attempt<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn attempt_then_propagates_failure() {
        let failed: Attempt<i32> = Attempt::failure("boom");
        assert!(failed.then(Attempt::success("next")).is_failure());
    }

    #[rstest]
    fn either_and_then_chains_rights() {
        let start: Either<String, i32> = Either::right(1);
        let result = Monad::and_then(start, |x| Either::right(x * 10));
        assert_eq!(result, Either::Right(10));
    }
}
