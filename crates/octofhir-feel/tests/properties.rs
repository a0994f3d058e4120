//! Property tests across the FEEL runtime
//!
//! Covers:
//! - Trichotomy of the relational operators
//! - Three-valued logic laws at the facade
//! - Literal round trips through `string()` and the conversion functions

use octofhir_feel::eval::{ternary_and, ternary_not, ternary_or};
use octofhir_feel::types::BigDecimal;
use octofhir_feel::{FeelLib, FeelValue, Ternary};
use proptest::prelude::*;
use std::str::FromStr;

fn decimal(units: i64, hundredths: u8) -> FeelValue {
    let sign = if units < 0 { "-" } else { "" };
    let text = format!("{sign}{}.{hundredths:02}", units.unsigned_abs());
    FeelValue::Number(BigDecimal::from_str(&text).unwrap())
}

fn ternary() -> impl Strategy<Value = Ternary> {
    proptest::option::of(any::<bool>())
}

fn truth(value: FeelValue) -> Ternary {
    match value {
        FeelValue::Boolean(b) => Some(b),
        _ => None,
    }
}

// === Relational Operators ===

proptest! {
    #[test]
    fn prop_numbers_are_trichotomous(
        a in -1_000_000i64..1_000_000,
        af in 0u8..100,
        b in -1_000_000i64..1_000_000,
        bf in 0u8..100,
    ) {
        let lib = FeelLib::new();
        let (x, y) = (decimal(a, af), decimal(b, bf));
        let outcomes = [
            lib.less_than(&x, &y),
            lib.equal(&x, &y),
            lib.greater_than(&x, &y),
        ];
        let held = outcomes.iter().filter(|v| **v == FeelValue::Boolean(true)).count();
        prop_assert_eq!(held, 1);
        prop_assert_eq!(lib.less_equal_than(&x, &y), lib.greater_equal_than(&y, &x));
    }

    #[test]
    fn prop_equality_is_symmetric(a in ".{0,12}", b in ".{0,12}") {
        let lib = FeelLib::new();
        let (x, y) = (FeelValue::from(a.as_str()), FeelValue::from(b.as_str()));
        prop_assert_eq!(lib.equal(&x, &y), lib.equal(&y, &x));
        prop_assert_eq!(lib.is(&x, &y), FeelValue::Boolean(a == b));
    }

    #[test]
    fn prop_addition_commutes(a in any::<i32>(), b in any::<i32>()) {
        let lib = FeelLib::new();
        let (x, y) = (FeelValue::from(a), FeelValue::from(b));
        prop_assert_eq!(lib.add(&x, &y), lib.add(&y, &x));
        prop_assert_eq!(lib.subtract(&lib.add(&x, &y), &y), x);
    }
}

// === Three-valued Logic ===

proptest! {
    #[test]
    fn prop_de_morgan(a in ternary(), b in ternary()) {
        prop_assert_eq!(
            ternary_not(ternary_and(a, b)),
            ternary_or(ternary_not(a), ternary_not(b))
        );
        prop_assert_eq!(
            ternary_not(ternary_or(a, b)),
            ternary_and(ternary_not(a), ternary_not(b))
        );
    }

    #[test]
    fn prop_facade_logic_matches_ternary(a in ternary(), b in ternary()) {
        let lib = FeelLib::new();
        let (x, y) = (FeelValue::from(a), FeelValue::from(b));
        prop_assert_eq!(truth(lib.and(&x, &y)), ternary_and(a, b));
        prop_assert_eq!(truth(lib.or(&x, &y)), ternary_or(a, b));
        prop_assert_eq!(lib.and(&x, &y), lib.and(&y, &x));
        prop_assert_eq!(truth(lib.not(&x)), ternary_not(a));
    }

    #[test]
    fn prop_non_booleans_are_unknown_operands(n in any::<i32>()) {
        let lib = FeelLib::new();
        let number = FeelValue::from(n);
        prop_assert_eq!(lib.and(&number, &FeelValue::Boolean(false)), FeelValue::Boolean(false));
        prop_assert_eq!(lib.and(&number, &FeelValue::Boolean(true)), FeelValue::Null);
        prop_assert_eq!(lib.or(&number, &FeelValue::Boolean(true)), FeelValue::Boolean(true));
    }
}

// === Literal Round Trips ===

proptest! {
    #[test]
    fn prop_date_round_trip(year in 1i32..=9999, month in 1i32..=12, day in 1i32..=28) {
        let lib = FeelLib::new();
        let date = lib.date_from_parts(&year.into(), &month.into(), &day.into());
        let text = lib.string(&date);
        prop_assert_eq!(
            &text,
            &FeelValue::from(format!("{year:04}-{month:02}-{day:02}"))
        );
        prop_assert_eq!(lib.date(&text), date);
    }

    #[test]
    fn prop_time_round_trip(
        hour in 0i32..24,
        minute in 0i32..60,
        second in 0i32..60,
        offset_hours in -17i32..=17,
    ) {
        let lib = FeelLib::new();
        let offset = lib.duration(&FeelValue::from(format!(
            "{}PT{}H",
            if offset_hours < 0 { "-" } else { "" },
            offset_hours.abs()
        )));
        let time = lib.time_from_parts(&hour.into(), &minute.into(), &second.into(), Some(&offset));
        prop_assert_eq!(lib.is(&lib.time(&lib.string(&time)), &time), FeelValue::Boolean(true));
    }

    #[test]
    fn prop_duration_round_trip(days in 0u32..400, hours in 0u32..24, minutes in 0u32..60) {
        let lib = FeelLib::new();
        let literal = format!("P{days}DT{hours}H{minutes}M");
        let duration = lib.duration(&FeelValue::from(literal));
        prop_assert_eq!(lib.duration(&lib.string(&duration)), duration.clone());
        prop_assert!(lib.is_days_and_time_duration(&duration));
    }
}
