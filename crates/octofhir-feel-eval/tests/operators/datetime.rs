//! Date and Time Function Tests
//!
//! Tests for: date, time, date and time constructors, literal validation,
//! component extraction, durations and calendar names

use crate::{date, date_time, duration, int, lib, null, num, text, time};
use octofhir_feel_types::FeelValue;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Literal Validation
// ============================================================================

#[rstest]
#[case("2012-13-01")]
#[case("2012-02-30")]
#[case("12-01-01")]
#[case("not a date")]
fn test_malformed_dates_are_null(#[case] literal: &str) {
    assert_eq!(date(literal), null());
}

#[test]
fn test_years_beyond_calendar_range_are_null() {
    let lib = lib();
    let far = lib.date_from_parts(&int(262142), &int(12), &int(31));
    assert_eq!(lib.year(&far), int(262142));
    assert_eq!(lib.date_from_parts(&int(262143), &int(1), &int(1)), null());
    assert_eq!(date("999999999-12-31"), null());
    assert_eq!(date("-999999999-01-01"), null());
}

#[rstest]
#[case("24:00:00")]
#[case("10:60:00")]
#[case("10:00:00+18:00")]
#[case("10:00:00@Nowhere/Land")]
#[case("10:00:00+01:00@Europe/Paris")]
fn test_malformed_times_are_null(#[case] literal: &str) {
    assert_eq!(time(literal), null());
}

#[test]
fn test_constructors_from_parts() {
    let lib = lib();
    assert_eq!(
        lib.date_from_parts(&int(2020), &int(2), &int(29)),
        date("2020-02-29")
    );
    assert_eq!(lib.date_from_parts(&int(2019), &int(2), &int(29)), null());
    assert_eq!(
        lib.time_from_parts(&int(10), &int(30), &int(0), Some(&duration("PT1H"))),
        time("10:30:00+01:00")
    );
    assert_eq!(
        lib.date_and_time_from_parts(&date("2020-01-01"), &time("10:00:00Z")),
        date_time("2020-01-01T10:00:00Z")
    );
}

#[test]
fn test_conversions_between_variants() {
    let lib = lib();
    let dt = date_time("2018-12-10T10:30:00+01:00");
    assert_eq!(lib.date(&dt), date("2018-12-10"));
    assert_eq!(lib.time(&dt), time("10:30:00+01:00"));
    assert_eq!(lib.time(&date("2018-12-10")), time("00:00:00Z"));
    assert_eq!(
        lib.date_and_time(&text("2018-12-10")),
        date_time("2018-12-10T00:00:00")
    );
}

#[test]
fn test_literal_round_trip() {
    let lib = lib();
    for literal in [
        "2018-12-10T10:30:00.5+01:00",
        "2018-12-10T10:30:00@Europe/Paris",
        "2018-12-10T10:30:00",
    ] {
        let value = date_time(literal);
        assert_eq!(lib.string(&value), text(literal));
        assert_eq!(lib.is(&lib.date_and_time(&lib.string(&value)), &value), FeelValue::Boolean(true));
    }
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn test_date_components() {
    let lib = lib();
    let d = date("2019-09-17");
    assert_eq!(lib.year(&d), int(2019));
    assert_eq!(lib.month(&d), int(9));
    assert_eq!(lib.day(&d), int(17));
    assert_eq!(lib.weekday(&d), int(2));
    assert_eq!(lib.day_of_year(&d), int(260));
    assert_eq!(lib.day_of_week(&d), text("Tuesday"));
    assert_eq!(lib.month_of_year(&d), text("September"));
    assert_eq!(lib.week_of_year(&d), int(38));
}

#[test]
fn test_time_components() {
    let lib = lib();
    let dt = date_time("2018-12-10T10:30:15+05:00");
    assert_eq!(lib.hour(&dt), int(10));
    assert_eq!(lib.minute(&dt), int(30));
    assert_eq!(lib.second(&dt), int(15));
    assert_eq!(lib.time_offset(&dt), duration("PT5H"));
    assert_eq!(lib.timezone(&dt), null());
    let paris = date_time("2018-12-10T10:30:00@Europe/Paris");
    assert_eq!(lib.timezone(&paris), text("Europe/Paris"));
    assert_eq!(lib.time_offset(&date_time("2018-12-10T10:30:00")), null());
}

#[test]
fn test_duration_components() {
    let lib = lib();
    let ym = duration("P1Y2M");
    assert_eq!(lib.years(&ym), int(1));
    assert_eq!(lib.months(&ym), int(2));
    assert_eq!(lib.days(&ym), null());
    let dt = duration("P2DT3H4M5.5S");
    assert_eq!(lib.days(&dt), int(2));
    assert_eq!(lib.hours(&dt), int(3));
    assert_eq!(lib.minutes(&dt), int(4));
    assert_eq!(lib.seconds(&dt), num("5.5"));
}

#[test]
fn test_years_and_months_duration() {
    let lib = lib();
    assert_eq!(
        lib.years_and_months_duration(&date("2011-12-22"), &date("2013-08-24")),
        duration("P1Y8M")
    );
    assert_eq!(
        lib.years_and_months_duration(&date("2013-08-24"), &date("2011-12-22")),
        duration("-P1Y8M")
    );
    assert_eq!(lib.years_and_months_duration(&null(), &date("2011-12-22")), null());
}

#[test]
fn test_comparable_values() {
    let lib = lib();
    assert_eq!(lib.date_time_value(&date_time("1970-01-01T01:00:00Z")), int(3600));
    assert_eq!(lib.date_time_value(&date_time("1970-01-01T01:00:00")), int(3600));
    assert_eq!(lib.duration_value(&duration("P1Y1M")), int(13));
    assert_eq!(lib.date_value(&text("x")), null());
}
