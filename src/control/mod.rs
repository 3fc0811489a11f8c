//! Container types for presence, failure and two-branch results.
//!
//! - [`Optional`]: a value that is `Present` or `Absent`
//! - [`Attempt`]: a computation run eagerly whose failure is captured as a value
//! - [`Either`]: a right-biased value that is `Left` or `Right`
//!
//! The three are independent. Each converts into the others only through an
//! explicit operation (`to_either`, `to_attempt`, `to_optional`, ...), so a
//! chain never picks up a nested container by accident.
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::{Attempt, Either, Optional};
//!
//! let prices = [("apple", "3"), ("pear", "x")];
//! let price_of = |fruit: &str| {
//!     Optional::of(prices.iter().find(|(name, _)| *name == fruit).map(|(_, price)| *price))
//! };
//!
//! let apple: Either<String, u32> = price_of("apple")
//!     .to_either_with(|| "unknown fruit".to_string())
//!     .flat_map(|price| Attempt::of(|| price.parse::<u32>()).to_either());
//! assert_eq!(apple, Either::Right(3));
//!
//! let plum = price_of("plum").to_either_with(|| "unknown fruit".to_string());
//! assert_eq!(plum, Either::Left("unknown fruit".to_string()));
//! ```

mod attempt;
mod either;
mod optional;

pub use attempt::{Attempt, AttemptError, BoxError};
pub use either::Either;
pub use optional::Optional;
