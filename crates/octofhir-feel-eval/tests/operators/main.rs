//! Operator integration tests for the FEEL facade
//!
//! These tests verify operator behavior including:
//! - Correct computation for each FEEL type
//! - Null propagation and three-valued logic
//! - Temporal qualifier rules for `=` and `is`
//! - Fault containment at the facade

mod aggregate;
mod arithmetic;
mod comparison;
mod datetime;
mod list;
mod logical;
mod range;
mod string;

use octofhir_feel_eval::FeelLib;
use octofhir_feel_types::{BigDecimal, FeelValue};
use std::str::FromStr;

// ============================================================================
// Test Helpers
// ============================================================================

fn lib() -> FeelLib {
    FeelLib::new()
}

fn num(text: &str) -> FeelValue {
    FeelValue::Number(BigDecimal::from_str(text).unwrap())
}

fn int(value: i32) -> FeelValue {
    FeelValue::from(value)
}

fn text(value: &str) -> FeelValue {
    FeelValue::from(value)
}

fn boolean(value: bool) -> FeelValue {
    FeelValue::Boolean(value)
}

fn null() -> FeelValue {
    FeelValue::Null
}

fn ints(values: &[i32]) -> FeelValue {
    FeelValue::list(values.iter().copied().map(FeelValue::from))
}

fn date(literal: &str) -> FeelValue {
    lib().date(&text(literal))
}

fn time(literal: &str) -> FeelValue {
    lib().time(&text(literal))
}

fn date_time(literal: &str) -> FeelValue {
    lib().date_and_time(&text(literal))
}

fn duration(literal: &str) -> FeelValue {
    lib().duration(&text(literal))
}
