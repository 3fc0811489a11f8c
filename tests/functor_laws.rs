#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

use proptest::prelude::*;
use vessel::control::{Attempt, AttemptError, Either, Optional};
use vessel::typeclass::Functor;

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::of)
}

fn attempt_strategy() -> impl Strategy<Value = Attempt<i32>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,8}")
        .prop_map(|result| Attempt::from(result.map_err(AttemptError::msg)))
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

// =============================================================================
// Optional<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Optional<i32>
    #[test]
    fn prop_optional_identity_law(value in optional_strategy()) {
        let result = Functor::fmap(value, |x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Optional<i32>
    #[test]
    fn prop_optional_composition_law(value in optional_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Functor::fmap(Functor::fmap(value, function1), function2);
        let right = Functor::fmap(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap agrees with the inherent map
    #[test]
    fn prop_optional_fmap_is_map(value in optional_strategy()) {
        let function = |n: i32| n.wrapping_sub(7);
        prop_assert_eq!(Functor::fmap(value, function), value.map(function));
    }
}

// =============================================================================
// Attempt<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Attempt<i32>
    #[test]
    fn prop_attempt_identity_law(value in attempt_strategy()) {
        let result = Functor::fmap(value.clone(), |x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Attempt<i32>
    #[test]
    fn prop_attempt_composition_law(value in attempt_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.to_string();

        let left = Functor::fmap(Functor::fmap(value.clone(), function1), function2);
        let right = Functor::fmap(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Either<String, i32>
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        let result = Functor::fmap(value.clone(), |x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Either<String, i32>
    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| i64::from(n) - 1;

        let left = Functor::fmap(Functor::fmap(value.clone(), function1), function2);
        let right = Functor::fmap(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}
