//! Logical Operator Tests
//!
//! Tests for: and, or, not, variadic and/or

use crate::{boolean, int, lib, null, text};
use octofhir_feel_types::FeelValue;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// And Tests - Three-Valued Logic
// ============================================================================

/// And Truth Table:
/// | A     | B     | A and B |
/// |-------|-------|---------|
/// | true  | true  | true    |
/// | true  | false | false   |
/// | true  | null  | null    |
/// | false | null  | false   | <- false dominates null
/// | null  | null  | null    |
#[rstest]
#[case(boolean(true), boolean(true), boolean(true))]
#[case(boolean(true), boolean(false), boolean(false))]
#[case(boolean(true), null(), null())]
#[case(boolean(false), boolean(true), boolean(false))]
#[case(boolean(false), boolean(false), boolean(false))]
#[case(boolean(false), null(), boolean(false))]
#[case(null(), boolean(true), null())]
#[case(null(), boolean(false), boolean(false))]
#[case(null(), null(), null())]
fn test_and(#[case] a: FeelValue, #[case] b: FeelValue, #[case] expected: FeelValue) {
    assert_eq!(lib().and(&a, &b), expected);
}

// ============================================================================
// Or Tests - Three-Valued Logic
// ============================================================================

/// Or Truth Table:
/// | A     | B     | A or B |
/// |-------|-------|--------|
/// | true  | null  | true   | <- true dominates null
/// | false | false | false  |
/// | false | null  | null   |
/// | null  | null  | null   |
#[rstest]
#[case(boolean(true), boolean(true), boolean(true))]
#[case(boolean(true), boolean(false), boolean(true))]
#[case(boolean(true), null(), boolean(true))]
#[case(boolean(false), boolean(false), boolean(false))]
#[case(boolean(false), null(), null())]
#[case(null(), boolean(true), boolean(true))]
#[case(null(), boolean(false), null())]
#[case(null(), null(), null())]
fn test_or(#[case] a: FeelValue, #[case] b: FeelValue, #[case] expected: FeelValue) {
    assert_eq!(lib().or(&a, &b), expected);
}

#[rstest]
#[case(boolean(true), boolean(false))]
#[case(boolean(false), boolean(true))]
#[case(null(), null())]
#[case(text("true"), null())]
#[case(int(1), null())]
fn test_not(#[case] operand: FeelValue, #[case] expected: FeelValue) {
    assert_eq!(lib().not(&operand), expected);
}

#[test]
fn test_non_booleans_are_unknown() {
    let lib = lib();
    assert_eq!(lib.and(&int(1), &boolean(true)), null());
    assert_eq!(lib.and(&text("x"), &boolean(false)), boolean(false));
    assert_eq!(lib.or(&text("x"), &boolean(true)), boolean(true));
}

// ============================================================================
// Variadic Forms
// ============================================================================

#[test]
fn test_variadic_and_or() {
    let lib = lib();
    let operands = [boolean(true), null(), boolean(false)];
    assert_eq!(lib.boolean_and(&operands), boolean(false));
    assert_eq!(lib.boolean_or(&operands), boolean(true));
    assert_eq!(
        lib.boolean_and(&[FeelValue::list([boolean(true), boolean(true)])]),
        boolean(true)
    );
    // a single non-list operand is not a valid call
    assert_eq!(lib.boolean_and(&[boolean(true)]), null());
    assert_eq!(lib.boolean_or(&[boolean(true)]), null());
}
