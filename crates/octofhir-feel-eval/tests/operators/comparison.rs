//! Comparison Operator Tests
//!
//! Tests for: =, !=, <, >, <=, >=, is, across types and with nulls

use crate::{boolean, date, date_time, duration, int, ints, lib, null, num, text, time};
use octofhir_feel_types::{FeelContext, FeelValue};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Null Dispatch
// ============================================================================

#[rstest]
#[case(null(), null(), boolean(true), null())]
#[case(null(), int(1), boolean(false), null())]
#[case(int(1), null(), boolean(false), null())]
#[case(int(1), int(2), boolean(false), boolean(true))]
fn test_null_dispatch(
    #[case] left: FeelValue,
    #[case] right: FeelValue,
    #[case] equal: FeelValue,
    #[case] less: FeelValue,
) {
    let lib = lib();
    assert_eq!(lib.equal(&left, &right), equal);
    assert_eq!(lib.less_than(&left, &right), less);
}

#[test]
fn test_null_less_equal_null() {
    let lib = lib();
    assert_eq!(lib.less_equal_than(&null(), &null()), boolean(true));
    assert_eq!(lib.greater_equal_than(&null(), &null()), boolean(true));
    assert_eq!(lib.not_equal(&null(), &null()), boolean(false));
}

// ============================================================================
// Per-Type Ordering
// ============================================================================

#[rstest]
#[case(num("1.10"), num("1.1"), boolean(true))]
#[case(text("abc"), text("abc"), boolean(true))]
#[case(date("2020-01-01"), date("2020-01-01"), boolean(true))]
#[case(duration("P1Y"), duration("P12M"), boolean(true))]
#[case(duration("PT24H"), duration("P1D"), boolean(true))]
#[case(int(1), text("1"), boolean(false))]
#[case(boolean(true), int(1), boolean(false))]
fn test_equal(#[case] left: FeelValue, #[case] right: FeelValue, #[case] expected: FeelValue) {
    assert_eq!(lib().equal(&left, &right), expected);
}

#[rstest]
#[case(num("-1"), num("0.5"))]
#[case(text("a"), text("b"))]
#[case(date("2019-12-31"), date("2020-01-01"))]
#[case(time("09:00:00Z"), time("11:00:00+01:00"))]
#[case(duration("P1M"), duration("P1Y"))]
#[case(duration("PT59M"), duration("PT1H"))]
fn test_strict_order(#[case] smaller: FeelValue, #[case] larger: FeelValue) {
    let lib = lib();
    assert_eq!(lib.less_than(&smaller, &larger), boolean(true));
    assert_eq!(lib.greater_than(&larger, &smaller), boolean(true));
    assert_eq!(lib.less_than(&larger, &smaller), boolean(false));
    assert_eq!(lib.equal(&smaller, &larger), boolean(false));
}

#[test]
fn test_heterogeneous_operands_are_unordered() {
    let lib = lib();
    assert_eq!(lib.less_than(&int(1), &text("a")), null());
    assert_eq!(lib.less_than(&boolean(false), &boolean(true)), null());
    assert_eq!(lib.less_than(&duration("P1Y"), &duration("P1D")), null());
}

// ============================================================================
// Temporal Qualifiers
// ============================================================================

#[test]
fn test_time_zone_equivalence() {
    let lib = lib();
    assert_eq!(
        lib.equal(&time("00:00:00Z"), &time("00:00:00+00:00")),
        boolean(true)
    );
    assert_eq!(
        lib.equal(&time("00:00:00+00:00"), &time("00:00:00@Etc/UTC")),
        boolean(false)
    );
    assert_eq!(
        lib.equal(&time("00:00:00@Etc/UTC"), &time("00:00:00@Etc/UTC")),
        boolean(true)
    );
    assert_eq!(lib.equal(&time("00:00:00"), &time("00:00:00Z")), boolean(false));
}

#[test]
fn test_date_time_equal_by_instant() {
    let lib = lib();
    let paris = date_time("2018-12-10T10:30:00+01:00");
    let utc = date_time("2018-12-10T09:30:00Z");
    assert_eq!(lib.equal(&paris, &utc), boolean(true));
    assert_eq!(
        lib.equal(&date_time("2018-12-10T09:30:00"), &utc),
        boolean(false)
    );
}

#[test]
fn test_is_is_stricter_than_equal() {
    let lib = lib();
    let paris = date_time("2018-12-10T10:30:00+01:00");
    let utc = date_time("2018-12-10T09:30:00Z");
    assert_eq!(lib.is(&paris, &utc), boolean(false));
    assert_eq!(lib.is(&paris, &paris.clone()), boolean(true));
    assert_eq!(
        lib.is(&time("00:00:00Z"), &time("00:00:00@Etc/UTC")),
        boolean(false)
    );
    assert_eq!(lib.is(&null(), &null()), boolean(true));
    assert_eq!(lib.is(&int(1), &num("1.0")), boolean(true));
    assert_eq!(lib.is(&int(1), &text("1")), boolean(false));
}

// ============================================================================
// Structured Values
// ============================================================================

#[test]
fn test_list_equality_with_nulls() {
    let lib = lib();
    let list = FeelValue::list([int(1), null(), int(3)]);
    assert_eq!(lib.equal(&list, &list.clone()), boolean(true));
    assert_eq!(lib.equal(&ints(&[1, 2]), &null()), boolean(false));
    assert_eq!(lib.equal(&ints(&[1, 2]), &ints(&[1, 2, 3])), boolean(false));
    assert_eq!(
        lib.equal(&ints(&[1, 2]), &FeelValue::list([int(1), text("2")])),
        boolean(false)
    );
}

#[test]
fn test_context_equality() {
    let lib = lib();
    let a = FeelValue::Context(FeelContext::new().with("x", int(1)).with("y", int(2)));
    let b = FeelValue::Context(FeelContext::new().with("y", int(2)).with("x", int(1)));
    let c = FeelValue::Context(FeelContext::new().with("x", int(1)));
    assert_eq!(lib.equal(&a, &b), boolean(true));
    assert_eq!(lib.equal(&a, &c), boolean(false));
}

#[test]
fn test_range_equality() {
    let lib = lib();
    let closed = lib.range(true, &int(1), &int(5), true);
    let half_open = lib.range(true, &int(1), &int(5), false);
    assert_eq!(lib.equal(&closed, &closed.clone()), boolean(true));
    assert_eq!(lib.equal(&closed, &half_open), boolean(false));
}
