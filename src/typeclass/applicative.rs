//! Applicative type class - combining independent values in a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(identity).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::Optional;
//! use vessel::typeclass::Applicative;
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(lifted, Optional::Present(42));
//!
//! let sum = Optional::present(1).map2(Optional::present(2), |x, y| x + y);
//! assert_eq!(sum, Optional::Present(3));
//! ```

use super::functor::Functor;
use crate::control::{Attempt, Either, Optional};

/// A type class for functors that can lift values and combine independent
/// computations.
///
/// When either side of `map2` is empty, failed or left, the combination
/// short-circuits to that value, preferring the first one.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    /// use vessel::typeclass::Applicative;
    ///
    /// let a: Either<&str, i32> = Either::right(1);
    /// let b: Either<&str, i32> = Either::left("missing");
    /// assert_eq!(a.map2(b, |x, y| x + y), Either::Left("missing"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Attempt<A> Implementation
// =============================================================================

impl<A> Applicative for Attempt<A> {
    #[inline]
    fn pure<B>(value: B) -> Attempt<B> {
        Attempt::Success(value)
    }

    fn map2<B, C, F>(self, other: Attempt<B>, function: F) -> Attempt<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Attempt::Success(b)) => Attempt::catching(|| function(a, b)),
            (Self::Failure(error), _) | (_, Attempt::Failure(error)) => Attempt::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Attempt<B>) -> Attempt<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
