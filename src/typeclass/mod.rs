//! Type class traits implemented by the containers in [`crate::control`].
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! The containers already expose `map` and `flat_map` as inherent methods.
//! These traits state the laws those methods obey and let generic code
//! work over `Optional`, `Attempt` and `Either` alike.
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::{Attempt, Optional};
//! use vessel::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Optional::present(7)), Optional::Present("#7".to_string()));
//! assert_eq!(describe(Attempt::success(7)), Attempt::Success("#7".to_string()));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
