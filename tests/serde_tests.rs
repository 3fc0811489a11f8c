#![cfg(feature = "serde")]

//! Integration tests for serde support in vessel.
//!
//! `Optional` and `Either` serialize as externally tagged enums. `Attempt`
//! has no serde support since a captured error cannot be rebuilt.

use rstest::rstest;
use vessel::control::{Either, Optional};

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

// =============================================================================
// Optional Integration Tests
// =============================================================================

#[rstest]
#[case(Optional::Present(7), r#"{"Present":7}"#)]
#[case(Optional::Absent, r#""Absent""#)]
fn test_optional_json_shape(#[case] optional: Optional<i32>, #[case] expected: &str) {
    let json = serde_json::to_string(&optional).unwrap();
    assert_eq!(json, expected);

    let restored: Optional<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, optional);
}

#[rstest]
fn test_nested_containers() {
    let nested: Vec<Either<String, Optional<i32>>> = vec![
        Either::Right(Optional::Present(1)),
        Either::Right(Optional::Absent),
        Either::Left("missing".to_string()),
    ];
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Vec<Either<String, Optional<i32>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}
