//! # vessel
//!
//! Value containers for absence, failure and two-branch results, with a
//! small pattern-matching engine over them.
//!
//! ## Overview
//!
//! - **Containers**: [`Optional`](control::Optional), [`Attempt`](control::Attempt)
//!   and [`Either`](control::Either), each with `map`, `flat_map`, `filter`,
//!   `fold` and explicit conversions into the others
//! - **Type Classes**: Functor, Applicative and Monad over the containers
//! - **Pattern Matching**: ordered, guarded, first-match-wins cases with
//!   destructuring of containers and tuples
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `pattern`: The pattern-matching engine and the `match_of!` macro
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use vessel::prelude::*;
//! use vessel::pattern::{failure, success, wildcard};
//!
//! let parsed = Attempt::of(|| "XYZ".parse::<i32>());
//! let verdict = Match::on(&parsed)
//!     .case(success(wildcard()), |()| "number")
//!     .case(failure(wildcard()), |()| "not a number")
//!     .get();
//! assert_eq!(verdict, Ok("not a number"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type classes and the pattern-matching
/// entry points. Individual patterns live in [`pattern`] so that short
/// names such as `any` and `left` are imported only where wanted.
///
/// # Usage
///
/// ```rust
/// use vessel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "pattern")]
    pub use crate::pattern::{Match, MatchError, Pattern};
}

pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "pattern")]
pub mod pattern;
