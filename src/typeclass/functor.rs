//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::Optional;
//! use vessel::typeclass::Functor;
//!
//! let present = Optional::present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::Present("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::absent();
//! assert_eq!(absent.fmap(|n| n.to_string()), Optional::Absent);
//! ```

use super::higher::TypeConstructor;
use crate::control::{Attempt, Either, Optional};

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` never changes the shape of the container: an empty, failed or
/// left value stays as it is and the function is not invoked.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Either;
    /// use vessel::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::right(5);
    /// assert_eq!(right.fmap(|n| n * 2), Either::Right(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    /// use vessel::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).replace("replaced"), Optional::Present("replaced"));
    /// assert_eq!(Optional::<i32>::absent().replace("replaced"), Optional::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Attempt<A> Implementation
// =============================================================================

impl<A> Functor for Attempt<A> {
    /// Panics inside `function` are captured, as with [`Attempt::map`].
    #[inline]
    fn fmap<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Attempt<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Success(value) => Attempt::catching(|| function(value)),
            Self::Failure(error) => Attempt::Failure(error.clone()),
        }
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_fmap_ref_keeps_original() {
        let value = Optional::present("hello".to_string());
        assert_eq!(value.fmap_ref(String::len), Optional::Present(5));
        assert_eq!(value, Optional::Present("hello".to_string()));
    }

    #[rstest]
    fn attempt_fmap_ref_clones_failure() {
        let failed: Attempt<i32> = Attempt::failure("boom");
        let mapped = failed.fmap_ref(|n| n + 1);
        assert_eq!(mapped, failed.fmap(|n| n + 1));
    }

    #[rstest]
    fn either_void_keeps_left() {
        let left: Either<&str, i32> = Either::left("e");
        assert_eq!(left.void(), Either::Left("e"));
    }
}
