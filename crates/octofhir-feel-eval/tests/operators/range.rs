//! Range Function Tests
//!
//! Tests for: range construction, `in`, and the interval relations
//! before, after, meets, met by, overlaps, finishes, includes, during,
//! starts, coincides

use crate::{boolean, date, int, lib, null, text};
use octofhir_feel_types::FeelValue;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn closed(start: i32, end: i32) -> FeelValue {
    lib().range(true, &int(start), &int(end), true)
}

fn closed_open(start: i32, end: i32) -> FeelValue {
    lib().range(true, &int(start), &int(end), false)
}

fn open_closed(start: i32, end: i32) -> FeelValue {
    lib().range(false, &int(start), &int(end), true)
}

#[test]
fn test_construction_is_validated() {
    let lib = lib();
    assert_eq!(lib.string(&closed_open(1, 5)), text("[1..5)"));
    assert_eq!(lib.range(true, &int(5), &int(1), true), null());
    assert_eq!(lib.range(true, &int(1), &text("a"), true), null());
    assert_eq!(
        lib.string(&lib.range_from_operator(&text("<"), &int(10))),
        text("< 10")
    );
    assert_eq!(lib.range_from_operator(&text("!="), &int(10)), null());
    assert_eq!(lib.range_from_operator(&text("~"), &int(10)), null());
}

#[test]
fn test_range_contains() {
    let lib = lib();
    assert_eq!(lib.range_contains(&closed(1, 5), &int(5)), boolean(true));
    assert_eq!(lib.range_contains(&closed_open(1, 5), &int(5)), boolean(false));
    assert_eq!(
        lib.range_contains(&lib.range_from_operator(&text("<"), &int(10)), &int(-100)),
        boolean(true)
    );
    assert_eq!(
        lib.range_contains(&lib.range_from_operator(&text(">="), &int(10)), &int(9)),
        boolean(false)
    );
    assert_eq!(lib.range_contains(&closed(1, 5), &null()), null());
    let year = lib.range(true, &date("2020-01-01"), &date("2020-12-31"), true);
    assert_eq!(lib.range_contains(&year, &date("2020-06-15")), boolean(true));
}

#[test]
fn test_meets_depends_on_boundaries() {
    let lib = lib();
    assert_eq!(lib.meets(&closed(1, 5), &closed(5, 10)), boolean(true));
    assert_eq!(lib.meets(&closed_open(1, 5), &closed(5, 10)), boolean(false));
    assert_eq!(lib.meets(&closed(1, 5), &open_closed(5, 10)), boolean(false));
    assert_eq!(lib.met_by(&closed(5, 10), &closed(1, 5)), boolean(true));
}

#[rstest]
#[case(int(1), int(10), boolean(true))]
#[case(int(10), int(1), boolean(false))]
#[case(int(1), closed(2, 5), boolean(true))]
#[case(closed(1, 5), int(5), boolean(false))]
#[case(closed_open(1, 5), int(5), boolean(true))]
#[case(closed_open(1, 5), closed(5, 10), boolean(true))]
#[case(closed(1, 5), closed(5, 10), boolean(false))]
fn test_before(#[case] left: FeelValue, #[case] right: FeelValue, #[case] expected: FeelValue) {
    assert_eq!(lib().before(&left, &right), expected);
}

#[test]
fn test_relations_between_ranges() {
    let lib = lib();
    assert_eq!(lib.after(&closed(6, 10), &closed(1, 5)), boolean(true));
    assert_eq!(lib.overlaps(&closed(1, 5), &closed(3, 8)), boolean(true));
    assert_eq!(lib.overlaps(&closed(1, 5), &closed(6, 8)), boolean(false));
    assert_eq!(lib.overlaps_before(&closed(1, 5), &closed(3, 8)), boolean(true));
    assert_eq!(lib.overlaps_after(&closed(3, 8), &closed(1, 5)), boolean(true));
    assert_eq!(lib.finishes(&int(10), &closed(1, 10)), boolean(true));
    assert_eq!(lib.finishes(&closed(3, 10), &closed(1, 10)), boolean(true));
    assert_eq!(lib.finished_by(&closed(1, 10), &int(10)), boolean(true));
    assert_eq!(lib.includes(&closed(1, 10), &int(5)), boolean(true));
    assert_eq!(lib.includes(&closed(1, 10), &closed(4, 6)), boolean(true));
    assert_eq!(lib.during(&int(5), &closed(1, 10)), boolean(true));
    assert_eq!(lib.during(&closed(4, 6), &closed(1, 10)), boolean(true));
    assert_eq!(lib.starts(&int(1), &closed(1, 10)), boolean(true));
    assert_eq!(lib.starts(&closed(1, 5), &closed(1, 10)), boolean(true));
    assert_eq!(lib.started_by(&closed(1, 10), &int(1)), boolean(true));
    assert_eq!(lib.coincides(&closed(1, 5), &closed(1, 5)), boolean(true));
    assert_eq!(lib.coincides(&closed(1, 5), &closed_open(1, 5)), boolean(false));
    assert_eq!(lib.coincides(&int(5), &int(5)), boolean(true));
}

#[test]
fn test_null_arguments() {
    let lib = lib();
    assert_eq!(lib.before(&null(), &closed(1, 5)), null());
    assert_eq!(lib.overlaps(&closed(1, 5), &null()), null());
}
