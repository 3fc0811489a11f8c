//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Optional<_>` or `Either<L, _>` as type constructors
//! directly. [`TypeConstructor`] works around this with a GAT.
//!
//! # Example
//!
//! ```rust
//! use vessel::control::Optional;
//! use vessel::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Optional<String> = transform_type(Optional::present(42));
//! assert_eq!(absent, Optional::Absent);
//! ```

use crate::control::{Attempt, Either, Optional};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// For `Either<L, R>` the constructor is `Either<L, _>`: the right type
/// varies and the left type is fixed.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> TypeConstructor for Attempt<A> {
    type Inner = A;
    type WithType<B> = Attempt<B>;
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}
