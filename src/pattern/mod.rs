//! Pattern matching over `Optional`, `Attempt`, `Either` and plain values.
//!
//! A [`Match`] is built from a subject and an ordered list of cases. Each
//! case pairs a [`Pattern`] with a handler; the first case whose pattern
//! matches wins and no later case is looked at. A match with no winning
//! case finishes with a [`MatchError`] naming the subject, unless it was
//! finished with [`Match::otherwise`].
//!
//! Patterns nest: container patterns ([`present`], [`success`],
//! [`failure`], [`left`], [`right`]) take an inner pattern, and [`pair`] /
//! [`triple`] match tuples element-wise. Guards are added with
//! [`guarded`] or per case with [`Match::case_if`].
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::Optional;
//! use vessel::pattern::{Match, absent, any, pair, present, wildcard};
//!
//! let subject = (Optional::<&str>::absent(), Optional::present("b"));
//! let picked = Match::on(&subject)
//!     .case(pair(present(any()), wildcard()), |(a, ())| a)
//!     .case(pair(absent(), present(any())), |((), b)| b)
//!     .case(wildcard(), |()| "neither")
//!     .get();
//! assert_eq!(picked, Ok("b"));
//! ```

mod match_macro;
mod matcher;
mod patterns;

pub use matcher::{Match, MatchError};
pub use patterns::{
    AbsentPattern, AnyValue, Equals, FailurePattern, Guarded, LeftPattern, PairPattern, Pattern,
    PresentPattern, RightPattern, SuccessPattern, TriplePattern, When, Wildcard, absent, any,
    equals, failure, guarded, left, pair, present, right, success, triple, when, wildcard,
};
