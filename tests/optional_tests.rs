//! Integration tests for `Optional`.
//!
//! These tests exercise the public surface of `Optional` the way calling
//! code uses it: construction from raw values, laziness of the fallbacks,
//! and conversion into the other containers.

use rstest::rstest;
use std::cell::Cell;
use vessel::control::{Attempt, Either, Optional};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Some("a"), true)]
#[case(None, false)]
fn of_reflects_presence(#[case] raw: Option<&str>, #[case] expected_present: bool) {
    let optional = Optional::of(raw);
    assert_eq!(optional.is_present(), expected_present);
    assert_eq!(optional.is_absent(), !expected_present);
    assert_eq!(optional.get(), raw.as_ref());
}

#[rstest]
fn absent_is_the_default() {
    assert_eq!(Optional::<String>::default(), Optional::Absent);
}

#[rstest]
fn std_option_round_trip() {
    let optional: Optional<i32> = Some(3).into();
    let back: Option<i32> = optional.into();
    assert_eq!(back, Some(3));
}

// =============================================================================
// Mapping and Chaining
// =============================================================================

#[rstest]
fn map_on_absent_never_calls_the_function() {
    let calls = Cell::new(0);
    let mapped = Optional::<i32>::absent().map(|n| {
        calls.set(calls.get() + 1);
        n + 1
    });
    assert_eq!(mapped, Optional::Absent);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_nests_where_flat_map_does_not() {
    let lookup = |key: &str| Optional::of((key == "known").then_some(1));

    let nested: Optional<Optional<i32>> = Optional::present("known").map(lookup);
    let flat: Optional<i32> = Optional::present("known").flat_map(lookup);

    assert_eq!(nested, Optional::Present(Optional::Present(1)));
    assert_eq!(nested.flatten(), flat);
    assert_eq!(Optional::present("unknown").flat_map(lookup), Optional::Absent);
}

#[rstest]
#[case(Optional::present(4), Optional::Present(4))]
#[case(Optional::present(3), Optional::Absent)]
#[case(Optional::absent(), Optional::Absent)]
fn filter_keeps_even_values(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
    assert_eq!(input.filter(|n| n % 2 == 0), expected);
}

#[rstest]
#[should_panic(expected = "mapping failed")]
fn panic_in_map_reaches_the_caller() {
    let _ = Optional::present(1).map(|_| -> i32 { panic!("mapping failed") });
}

#[rstest]
fn panic_in_flat_map_is_not_captured() {
    let outcome = std::panic::catch_unwind(|| {
        Optional::present(1).flat_map(|_| -> Optional<i32> { panic!("chaining failed") })
    });
    assert!(outcome.is_err());
}

// =============================================================================
// Fallbacks
// =============================================================================

#[rstest]
fn or_else_prefers_the_alternative_only_when_absent() {
    let chosen = Optional::of(None)
        .or_else(|| Optional::of(Some("default")))
        .get_or_else("fallback");
    assert_eq!(chosen, "default");

    let calls = Cell::new(0);
    let kept = Optional::present("own").or_else(|| {
        calls.set(calls.get() + 1);
        Optional::present("other")
    });
    assert_eq!(kept, Optional::Present("own"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn get_or_else_with_is_lazy() {
    let calls = Cell::new(0);
    let value = Optional::present(1).get_or_else_with(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(Optional::<i32>::absent().get_or_else_with(|| 9), 9);
}

#[derive(Debug, PartialEq, Eq)]
struct Missing(&'static str);

#[rstest]
fn get_or_else_throw_uses_the_supplied_error() {
    assert_eq!(Optional::present(1).get_or_else_throw(|| Missing("id")), Ok(1));
    assert_eq!(
        Optional::<i32>::absent().get_or_else_throw(|| Missing("id")),
        Err(Missing("id"))
    );
}

#[rstest]
fn fold_covers_both_states() {
    let describe = |optional: Optional<i32>| optional.fold(|| "none".to_string(), |n| format!("n={n}"));
    assert_eq!(describe(Optional::present(2)), "n=2");
    assert_eq!(describe(Optional::absent()), "none");
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn peek_and_on_empty_fire_on_their_own_state() {
    let seen = Cell::new(0);
    let empties = Cell::new(0);

    let _ = Optional::present(5)
        .peek(|n| seen.set(*n))
        .on_empty(|| empties.set(empties.get() + 1));
    let _ = Optional::<i32>::absent()
        .peek(|n| seen.set(*n * 100))
        .on_empty(|| empties.set(empties.get() + 1));

    assert_eq!(seen.get(), 5);
    assert_eq!(empties.get(), 1);
}

#[rstest]
fn flattening_a_list_of_optionals() {
    let values = vec![Optional::present(1), Optional::absent(), Optional::present(3)];
    let present: Vec<i32> = values.into_iter().flatten().collect();
    assert_eq!(present, vec![1, 3]);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn conversions_into_other_containers() {
    assert_eq!(Optional::present(1).to_either("none"), Either::Right(1));
    assert_eq!(Optional::<i32>::absent().to_either("none"), Either::Left("none"));
    assert_eq!(Optional::present(1).to_attempt(), Attempt::Success(1));

    let missing = Optional::<i32>::absent().to_attempt();
    assert_eq!(missing.error().map(|error| error.message()), Some("no value present".to_string()));
}

#[rstest]
fn to_either_with_builds_the_left_lazily() {
    let calls = Cell::new(0);
    let either: Either<String, i32> = Optional::present(1).to_either_with(|| {
        calls.set(calls.get() + 1);
        "missing".to_string()
    });
    assert_eq!(either, Either::Right(1));
    assert_eq!(calls.get(), 0);
}
