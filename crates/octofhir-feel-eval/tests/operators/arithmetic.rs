//! Arithmetic Operator Tests
//!
//! Tests for: +, -, *, /, **, unary minus, decimal, round, modulo

use crate::{date, date_time, duration, int, lib, null, num, text, time};
use octofhir_feel_eval::FeelLib;
use octofhir_feel_types::{FeelValue, RoundingPolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Numbers
// ============================================================================

#[rstest]
#[case(num("1.1"), num("2.2"), num("3.3"))]
#[case(num("0.1"), num("0.2"), num("0.3"))]
#[case(int(1), null(), null())]
#[case(null(), null(), null())]
fn test_add_numbers(#[case] a: FeelValue, #[case] b: FeelValue, #[case] expected: FeelValue) {
    assert_eq!(lib().add(&a, &b), expected);
}

#[test]
fn test_precision_of_34_digits() {
    let lib = lib();
    assert_eq!(
        lib.add(&int(1), &num("0.000000000000000000000000000000001")),
        num("1.000000000000000000000000000000001")
    );
    // a 35th digit is rounded away
    assert_eq!(
        lib.add(&int(1), &num("0.0000000000000000000000000000000001")),
        int(1)
    );
    assert_eq!(
        lib.multiply(
            &num("1111111111111111111111111111111111"),
            &int(9)
        ),
        num("9999999999999999999999999999999999")
    );
}

#[test]
fn test_divide() {
    let lib = lib();
    assert_eq!(lib.divide(&int(10), &int(4)), num("2.5"));
    assert_eq!(
        lib.divide(&int(1), &int(3)),
        num("0.3333333333333333333333333333333333")
    );
    assert_eq!(lib.divide(&int(1), &int(0)), null());
    assert_eq!(lib.numeric_divide(&num("5.5"), &num("0.0")), null());
}

#[test]
fn test_arithmetic_rounds_half_up_by_default() {
    let a = num("1000000000000000000000000000000000");
    let b = num("0.5");
    assert_eq!(lib().add(&a, &b), num("1000000000000000000000000000000001"));
    // literals and decimal() keep half-even
    assert_eq!(lib().number(&text("2.5"), None, None), num("2.5"));
    assert_eq!(lib().decimal(&num("2.5"), &int(0)), num("2"));
}

#[test]
fn test_half_even_arithmetic_configuration() {
    let half_even = FeelLib::builder()
        .arithmetic_rounding(RoundingPolicy::HalfEven)
        .build();
    let a = num("1000000000000000000000000000000000");
    let b = num("0.5");
    assert_eq!(half_even.add(&a, &b), a);
}

#[test]
fn test_exponentiation_and_negation() {
    let lib = lib();
    assert_eq!(lib.exponentiation(&int(2), &int(10)), int(1024));
    assert_eq!(lib.exponentiation(&int(2), &int(-1)), num("0.5"));
    assert_eq!(lib.exponentiation(&null(), &int(2)), null());
    assert_eq!(lib.negate(&num("1.5")), num("-1.5"));
    assert_eq!(lib.negate(&null()), null());
}

#[test]
fn test_type_mismatch_is_contained() {
    let lib = lib();
    assert_eq!(lib.add(&int(1), &text("1")), null());
    assert_eq!(lib.subtract(&text("a"), &text("b")), null());
    assert_eq!(lib.multiply(&text("a"), &int(2)), null());
    assert_eq!(lib.negate(&text("a")), null());
}

// ============================================================================
// Rounding Functions
// ============================================================================

#[rstest]
#[case("2.5", "half_up", "3")]
#[case("2.5", "half_down", "2")]
#[case("2.5", "half_even", "2")]
#[case("3.5", "half_even", "4")]
#[case("-2.5", "up", "-3")]
#[case("-2.5", "down", "-2")]
#[case("-2.5", "half_up", "-3")]
fn test_round_modes(#[case] n: &str, #[case] mode: &str, #[case] expected: &str) {
    assert_eq!(lib().round(&num(n), &int(0), &text(mode)), num(expected));
}

#[rstest]
#[case("1.333", 2, "1.33")]
#[case("2.5", 0, "2")]
#[case("3.5", 0, "4")]
#[case("1250", -2, "1200")]
#[case("1350", -2, "1400")]
fn test_decimal(#[case] n: &str, #[case] scale: i32, #[case] expected: &str) {
    assert_eq!(lib().decimal(&num(n), &int(scale)), num(expected));
}

#[test]
fn test_floor_and_ceiling() {
    let lib = lib();
    assert_eq!(lib.floor(&num("1.5"), None), int(1));
    assert_eq!(lib.floor(&num("-1.5"), None), int(-2));
    assert_eq!(lib.floor(&num("-1.56"), Some(&int(1))), num("-1.6"));
    assert_eq!(lib.ceiling(&num("1.5"), None), int(2));
    assert_eq!(lib.ceiling(&num("-1.56"), Some(&int(1))), num("-1.5"));
}

#[rstest]
#[case(12, 5, 2)]
#[case(-12, 5, 3)]
#[case(12, -5, -3)]
#[case(-12, -5, -2)]
fn test_modulo_takes_divisor_sign(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(lib().modulo(&int(a), &int(b)), int(expected));
}

#[test]
fn test_modulo_of_large_dividend_keeps_divisor_sign() {
    let lib = lib();
    assert_eq!(lib.modulo(&num("1e120"), &int(7)), int(1));
    assert_eq!(lib.modulo(&num("-1e120"), &int(7)), int(6));
    assert_eq!(lib.int_modulo(&num("-1e120"), &int(7)), int(-1));
}

#[rstest]
#[case(12, 5, 2)]
#[case(-12, 5, -2)]
#[case(12, -5, 2)]
#[case(-12, -5, -2)]
fn test_int_modulo_takes_dividend_sign(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(lib().int_modulo(&int(a), &int(b)), int(expected));
}

// ============================================================================
// Temporal Arithmetic
// ============================================================================

#[test]
fn test_date_arithmetic() {
    let lib = lib();
    assert_eq!(
        lib.add(&date("2020-01-31"), &duration("P1M")),
        date("2020-02-29")
    );
    assert_eq!(
        lib.subtract(&date("2021-03-01"), &duration("P1D")),
        date("2021-02-28")
    );
    assert_eq!(
        lib.subtract(&date("2020-03-01"), &date("2020-02-01")),
        duration("P29D")
    );
}

#[test]
fn test_date_time_arithmetic() {
    let lib = lib();
    assert_eq!(
        lib.subtract(
            &date_time("2020-01-02T12:00:00Z"),
            &date_time("2020-01-01T00:00:00Z")
        ),
        duration("P1DT12H")
    );
    assert_eq!(
        lib.add(&date_time("2020-01-01T23:00:00"), &duration("PT2H")),
        date_time("2020-01-02T01:00:00")
    );
    // mixed naive and aware operands have no difference
    assert_eq!(
        lib.subtract(
            &date_time("2020-01-02T00:00:00"),
            &date_time("2020-01-01T00:00:00Z")
        ),
        null()
    );
}

#[test]
fn test_time_arithmetic() {
    let lib = lib();
    assert_eq!(
        lib.add(&time("23:00:00"), &duration("PT2H")),
        time("01:00:00")
    );
    assert_eq!(
        lib.subtract(&time("10:30:00"), &time("09:00:00")),
        duration("PT1H30M")
    );
}

#[test]
fn test_duration_subtypes() {
    let lib = lib();
    assert_eq!(
        lib.duration_add(&duration("P1Y"), &duration("P1M")),
        duration("P1Y1M")
    );
    assert_eq!(lib.duration_add(&duration("P1Y"), &duration("P1D")), null());
    assert_eq!(
        lib.add(&duration("P1D"), &duration("PT12H")),
        duration("P1DT12H")
    );
    assert_eq!(lib.divide(&duration("P1D"), &duration("PT1H")), int(24));
    assert_eq!(lib.divide(&duration("P1Y"), &int(2)), duration("P6M"));
    assert_eq!(lib.multiply(&duration("PT1H"), &num("1.5")), duration("PT1H30M"));
}
