//! Comparison Operators for FEEL
//!
//! Implements: the per-type orders (number, string, date, time, date and
//! time, duration), boolean equality, and the generic `=`, `<` and `is`
//! used by the facade when operand types are not known up front.
//!
//! Temporal equality distinguishes qualifier kinds: two offsets compare by
//! instant, two zone ids compare by instant, an offset never equals a zone
//! id, and a naive value never equals an aware one. Ordering uses instants
//! throughout with naive values read as UTC.

use crate::comparator::{
    ComparableComparator, ComparablePrimitive, EqualityComparator, RelationalComparator,
};
use crate::error::EvalResult;
use crate::logic::{ternary_all, Ternary};
use bigdecimal::BigDecimal;
use octofhir_feel_types::{
    FeelContext, FeelDate, FeelDateTime, FeelDuration, FeelRange, FeelTime, FeelValue,
    ZoneQualifier,
};
use std::cmp::Ordering;

// ============================================================================
// Per-type orders
// ============================================================================

/// Numeric order
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericOrder;

impl ComparablePrimitive for NumericOrder {
    type Value = BigDecimal;

    fn extract(value: &FeelValue) -> Option<&BigDecimal> {
        value.as_number()
    }

    fn compare_values(left: &BigDecimal, right: &BigDecimal) -> Option<Ordering> {
        Some(left.cmp(right))
    }
}

/// Lexicographic order by code point
#[derive(Debug, Clone, Copy, Default)]
pub struct StringOrder;

impl ComparablePrimitive for StringOrder {
    type Value = str;

    fn extract(value: &FeelValue) -> Option<&str> {
        value.as_str()
    }

    fn compare_values(left: &str, right: &str) -> Option<Ordering> {
        Some(left.cmp(right))
    }
}

/// Calendar order of dates
#[derive(Debug, Clone, Copy, Default)]
pub struct DateOrder;

impl ComparablePrimitive for DateOrder {
    type Value = FeelDate;

    fn extract(value: &FeelValue) -> Option<&FeelDate> {
        value.as_date()
    }

    fn compare_values(left: &FeelDate, right: &FeelDate) -> Option<Ordering> {
        Some(left.cmp(right))
    }
}

/// How two optional qualifiers relate for `=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QualifierMatch {
    /// Both naive: compare local readings
    Local,
    /// Both offsets or both zone ids: compare instants
    Instant,
    /// Never equal
    Incompatible,
}

fn qualifier_match(left: Option<&ZoneQualifier>, right: Option<&ZoneQualifier>) -> QualifierMatch {
    match (left, right) {
        (None, None) => QualifierMatch::Local,
        (Some(ZoneQualifier::Offset(_)), Some(ZoneQualifier::Offset(_)))
        | (Some(ZoneQualifier::Zone(_)), Some(ZoneQualifier::Zone(_))) => QualifierMatch::Instant,
        _ => QualifierMatch::Incompatible,
    }
}

/// Order of times of day
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeOrder;

impl ComparablePrimitive for TimeOrder {
    type Value = FeelTime;

    fn extract(value: &FeelValue) -> Option<&FeelTime> {
        value.as_time()
    }

    fn compare_values(left: &FeelTime, right: &FeelTime) -> Option<Ordering> {
        match qualifier_match(left.zone(), right.zone()) {
            QualifierMatch::Local => Some(left.local_nanos_of_day().cmp(&right.local_nanos_of_day())),
            _ => Some(left.utc_nanos_of_day().cmp(&right.utc_nanos_of_day())),
        }
    }

    fn equal_values(left: &FeelTime, right: &FeelTime) -> bool {
        match qualifier_match(left.zone(), right.zone()) {
            QualifierMatch::Local => left.naive() == right.naive(),
            QualifierMatch::Instant => left.utc_nanos_of_day() == right.utc_nanos_of_day(),
            QualifierMatch::Incompatible => false,
        }
    }
}

/// Order of date and time values on the time line
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeOrder;

impl ComparablePrimitive for DateTimeOrder {
    type Value = FeelDateTime;

    fn extract(value: &FeelValue) -> Option<&FeelDateTime> {
        value.as_date_time()
    }

    fn compare_values(left: &FeelDateTime, right: &FeelDateTime) -> Option<Ordering> {
        match qualifier_match(left.zone(), right.zone()) {
            QualifierMatch::Local => Some(left.naive().cmp(&right.naive())),
            _ => Some(left.instant_nanos().cmp(&right.instant_nanos())),
        }
    }

    fn equal_values(left: &FeelDateTime, right: &FeelDateTime) -> bool {
        match qualifier_match(left.zone(), right.zone()) {
            QualifierMatch::Local => left.naive() == right.naive(),
            QualifierMatch::Instant => left.instant_nanos() == right.instant_nanos(),
            QualifierMatch::Incompatible => false,
        }
    }
}

/// Order of durations within one subtype
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationOrder;

impl ComparablePrimitive for DurationOrder {
    type Value = FeelDuration;

    fn extract(value: &FeelValue) -> Option<&FeelDuration> {
        value.as_duration()
    }

    fn compare_values(left: &FeelDuration, right: &FeelDuration) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

pub type NumericComparator = ComparableComparator<NumericOrder>;
pub type StringComparator = ComparableComparator<StringOrder>;
pub type DateComparator = ComparableComparator<DateOrder>;
pub type TimeComparator = ComparableComparator<TimeOrder>;
pub type DateTimeComparator = ComparableComparator<DateTimeOrder>;
pub type DurationComparator = ComparableComparator<DurationOrder>;

/// Booleans have equality but no order
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanComparator;

impl EqualityComparator for BooleanComparator {
    fn value_equal(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        match (left.as_boolean(), right.as_boolean()) {
            (Some(a), Some(b)) => Ok(Some(a == b)),
            _ => Ok(Some(false)),
        }
    }
}

// ============================================================================
// Generic comparator
// ============================================================================

/// FEEL `=` and `<` over any two values
///
/// Scalars delegate to their per-type comparator. Lists compare element by
/// element, contexts by key set and entry, ranges by bounds. Operands of
/// different types are unequal and unordered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueComparator;

impl ValueComparator {
    pub const fn new() -> Self {
        Self
    }

    fn list_equal(&self, left: &[FeelValue], right: &[FeelValue]) -> EvalResult<Ternary> {
        if left.len() != right.len() {
            return Ok(Some(false));
        }
        let elements = left
            .iter()
            .zip(right)
            .map(|(a, b)| self.equal_to(a, b))
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(ternary_all(elements))
    }

    fn context_equal(&self, left: &FeelContext, right: &FeelContext) -> EvalResult<Ternary> {
        if left.len() != right.len() {
            return Ok(Some(false));
        }
        let mut entries = Vec::with_capacity(left.len());
        for (key, value) in left.iter() {
            match right.get(key) {
                Some(other) => entries.push(self.equal_to(value, other)?),
                None => return Ok(Some(false)),
            }
        }
        Ok(ternary_all(entries))
    }

    fn range_equal(&self, left: &FeelRange, right: &FeelRange) -> EvalResult<Ternary> {
        if left.start_included() != right.start_included()
            || left.end_included() != right.end_included()
        {
            return Ok(Some(false));
        }
        let null = FeelValue::Null;
        let start = self.equal_to(left.start().unwrap_or(&null), right.start().unwrap_or(&null))?;
        let end = self.equal_to(left.end().unwrap_or(&null), right.end().unwrap_or(&null))?;
        Ok(ternary_all([start, end]))
    }
}

impl EqualityComparator for ValueComparator {
    fn value_equal(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        match (left, right) {
            (FeelValue::Boolean(_), _) => BooleanComparator.value_equal(left, right),
            (FeelValue::Number(_), _) => NumericComparator::new().value_equal(left, right),
            (FeelValue::String(_), _) => StringComparator::new().value_equal(left, right),
            (FeelValue::Date(_), _) => DateComparator::new().value_equal(left, right),
            (FeelValue::Time(_), _) => TimeComparator::new().value_equal(left, right),
            (FeelValue::DateTime(_), _) => DateTimeComparator::new().value_equal(left, right),
            (FeelValue::Duration(_), _) => DurationComparator::new().value_equal(left, right),
            (FeelValue::List(a), FeelValue::List(b)) => self.list_equal(a, b),
            (FeelValue::Context(a), FeelValue::Context(b)) => self.context_equal(a, b),
            (FeelValue::Range(a), FeelValue::Range(b)) => self.range_equal(a, b),
            (FeelValue::Function(a), FeelValue::Function(b)) => Ok(Some(a == b)),
            _ => Ok(Some(false)),
        }
    }
}

impl RelationalComparator for ValueComparator {
    fn compare(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Option<Ordering>> {
        match left {
            FeelValue::Number(_) => NumericComparator::new().compare(left, right),
            FeelValue::String(_) => StringComparator::new().compare(left, right),
            FeelValue::Date(_) => DateComparator::new().compare(left, right),
            FeelValue::Time(_) => TimeComparator::new().compare(left, right),
            FeelValue::DateTime(_) => DateTimeComparator::new().compare(left, right),
            FeelValue::Duration(_) => DurationComparator::new().compare(left, right),
            _ => Ok(None),
        }
    }
}

/// FEEL `is`: same type and same value, qualifiers matched structurally
///
/// Unlike `=`, a `+00:00` offset and the `Etc/UTC` zone are different and two
/// instants in different offsets are different.
pub fn value_is(left: &FeelValue, right: &FeelValue) -> bool {
    match (left, right) {
        (FeelValue::Null, FeelValue::Null) => true,
        (FeelValue::Number(a), FeelValue::Number(b)) => a == b,
        (FeelValue::Time(a), FeelValue::Time(b)) => a == b,
        (FeelValue::DateTime(a), FeelValue::DateTime(b)) => a == b,
        (FeelValue::List(a), FeelValue::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| value_is(x, y))
        }
        (FeelValue::Context(a), FeelValue::Context(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| value_is(x, y)))
        }
        (FeelValue::Range(a), FeelValue::Range(b)) => {
            let bound_is = |x: Option<&FeelValue>, y: Option<&FeelValue>| match (x, y) {
                (None, None) => true,
                (Some(x), Some(y)) => value_is(x, y),
                _ => false,
            };
            a.start_included() == b.start_included()
                && a.end_included() == b.end_included()
                && bound_is(a.start(), b.start())
                && bound_is(a.end(), b.end())
        }
        _ => left == right,
    }
}
