//! Time Operators for FEEL
//!
//! Implements: time - time, time +/- days and time duration.
//! Subtracting a naive time from an aware one (or the reverse) is null.

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::operators::comparison::TimeComparator;
use crate::operators::model::{
    any_null, expect_duration, expect_time, OrderedValueModel, ValueModel,
};
use bigdecimal::BigDecimal;
use chrono::TimeDelta;
use octofhir_feel_types::{FeelDuration, FeelTime, FeelType, FeelValue};

/// Time operators
pub trait TimeType: OrderedValueModel {
    fn time_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn time_add_duration(&self, time: &FeelValue, duration: &FeelValue) -> EvalResult<FeelValue>;

    fn time_subtract_duration(
        &self,
        time: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTimeType {
    comparator: TimeComparator,
}

impl DefaultTimeType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Years and months do not move a time of day
    fn add(&self, time: &FeelTime, duration: &FeelDuration) -> FeelValue {
        match duration {
            FeelDuration::DaysTime(delta) => FeelValue::Time(time.add_delta(*delta)),
            FeelDuration::YearsMonths { .. } => FeelValue::Null,
        }
    }
}

impl ValueModel for DefaultTimeType {
    fn feel_type(&self) -> FeelType {
        FeelType::Time
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }

    /// Seconds since midnight UTC; naive times read as UTC
    fn value(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        let nanos = expect_time(value)?.utc_nanos_of_day();
        Ok(FeelValue::Number(
            BigDecimal::new(nanos.into(), 9).normalized(),
        ))
    }
}

impl OrderedValueModel for DefaultTimeType {
    fn relation(&self) -> &dyn RelationalComparator {
        &self.comparator
    }
}

impl TimeType for DefaultTimeType {
    fn time_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = (expect_time(left)?, expect_time(right)?);
        let nanos = match (a.is_aware(), b.is_aware()) {
            (true, true) => a.utc_nanos_of_day() - b.utc_nanos_of_day(),
            (false, false) => a.local_nanos_of_day() - b.local_nanos_of_day(),
            _ => return Ok(FeelValue::Null),
        };
        Ok(FeelValue::Duration(FeelDuration::days_time(
            TimeDelta::nanoseconds(nanos),
        )))
    }

    fn time_add_duration(&self, time: &FeelValue, duration: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[time, duration]) {
            return Ok(FeelValue::Null);
        }
        Ok(self.add(expect_time(time)?, expect_duration(duration)?))
    }

    fn time_subtract_duration(
        &self,
        time: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[time, duration]) {
            return Ok(FeelValue::Null);
        }
        let negated = expect_duration(duration)?
            .negate()
            .ok_or_else(|| EvalError::overflow("time - duration"))?;
        Ok(self.add(expect_time(time)?, &negated))
    }
}
