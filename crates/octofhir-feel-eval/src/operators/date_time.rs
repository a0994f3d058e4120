//! Date and Time Operators for FEEL
//!
//! Implements: date and time - date and time, date and time +/- duration.
//! Years and months move the local reading; days and time move the instant.

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::operators::comparison::DateTimeComparator;
use crate::operators::date::shift_date_time_months;
use crate::operators::model::{
    any_null, expect_date_time, expect_duration, OrderedValueModel, ValueModel,
};
use bigdecimal::BigDecimal;
use octofhir_feel_types::{FeelDateTime, FeelDuration, FeelType, FeelValue};

/// Date and time operators
pub trait DateTimeType: OrderedValueModel {
    fn date_time_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn date_time_add_duration(
        &self,
        date_time: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue>;

    fn date_time_subtract_duration(
        &self,
        date_time: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDateTimeType {
    comparator: DateTimeComparator,
}

impl DefaultDateTimeType {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&self, date_time: &FeelDateTime, duration: &FeelDuration) -> EvalResult<FeelValue> {
        let shifted = match duration {
            FeelDuration::YearsMonths { months } => {
                shift_date_time_months(date_time.naive(), *months)
                    .map(|local| FeelDateTime::from_naive(local, date_time.zone().copied()))
            }
            FeelDuration::DaysTime(delta) => date_time.add_delta(*delta),
        };
        shifted
            .map(FeelValue::DateTime)
            .ok_or_else(|| EvalError::overflow("date and time + duration"))
    }
}

impl ValueModel for DefaultDateTimeType {
    fn feel_type(&self) -> FeelType {
        FeelType::DateAndTime
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }

    /// Seconds since the epoch, UTC normalized; naive values read as UTC
    fn value(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        let nanos = expect_date_time(value)?.instant_nanos();
        Ok(FeelValue::Number(
            BigDecimal::new(nanos.into(), 9).normalized(),
        ))
    }
}

impl OrderedValueModel for DefaultDateTimeType {
    fn relation(&self) -> &dyn RelationalComparator {
        &self.comparator
    }
}

impl DateTimeType for DefaultDateTimeType {
    fn date_time_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = (expect_date_time(left)?, expect_date_time(right)?);
        if a.is_aware() != b.is_aware() {
            return Ok(FeelValue::Null);
        }
        let (Some(a), Some(b)) = (a.utc_naive(), b.utc_naive()) else {
            return Err(EvalError::overflow("date and time - date and time"));
        };
        Ok(FeelValue::Duration(FeelDuration::days_time(
            a.signed_duration_since(b),
        )))
    }

    fn date_time_add_duration(
        &self,
        date_time: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[date_time, duration]) {
            return Ok(FeelValue::Null);
        }
        self.add(expect_date_time(date_time)?, expect_duration(duration)?)
    }

    fn date_time_subtract_duration(
        &self,
        date_time: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[date_time, duration]) {
            return Ok(FeelValue::Null);
        }
        let negated = expect_duration(duration)?
            .negate()
            .ok_or_else(|| EvalError::overflow("date and time - duration"))?;
        self.add(expect_date_time(date_time)?, &negated)
    }
}
