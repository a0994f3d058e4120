//! Date Operators for FEEL
//!
//! Implements: date - date, date +/- duration, and the calendar order.
//! The comparable value of a date is the epoch second of its UTC midnight.

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::operators::comparison::DateComparator;
use crate::operators::model::{
    any_null, expect_date, expect_duration, OrderedValueModel, ValueModel,
};
use chrono::{Months, NaiveDate, NaiveDateTime};
use octofhir_feel_types::{FeelDate, FeelDuration, FeelType, FeelValue};

/// Date operators
pub trait DateType: OrderedValueModel {
    /// Days between two dates as a days and time duration
    fn date_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn date_add_duration(&self, date: &FeelValue, duration: &FeelValue) -> EvalResult<FeelValue>;

    fn date_subtract_duration(
        &self,
        date: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue>;
}

/// Add a signed number of calendar months, clamping the day of month
pub(crate) fn shift_date_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date.checked_sub_months(magnitude)
    } else {
        date.checked_add_months(magnitude)
    }
}

/// [`shift_date_months`] for a local date and time
pub(crate) fn shift_date_time_months(date_time: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date_time.checked_sub_months(magnitude)
    } else {
        date_time.checked_add_months(magnitude)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDateType {
    comparator: DateComparator,
}

impl DefaultDateType {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&self, date: &FeelDate, duration: &FeelDuration) -> EvalResult<FeelValue> {
        let shifted = match duration {
            FeelDuration::YearsMonths { months } => shift_date_months(date.naive(), *months),
            FeelDuration::DaysTime(delta) => date
                .at_midnight()
                .checked_add_signed(*delta)
                .map(|date_time| date_time.date()),
        };
        shifted
            .map(|d| FeelValue::Date(FeelDate::from_naive(d)))
            .ok_or_else(|| EvalError::overflow("date + duration"))
    }
}

impl ValueModel for DefaultDateType {
    fn feel_type(&self) -> FeelType {
        FeelType::Date
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }

    fn value(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::from(expect_date(value)?.epoch_seconds()))
    }
}

impl OrderedValueModel for DefaultDateType {
    fn relation(&self) -> &dyn RelationalComparator {
        &self.comparator
    }
}

impl DateType for DefaultDateType {
    fn date_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = (expect_date(left)?, expect_date(right)?);
        let delta = a.naive().signed_duration_since(b.naive());
        Ok(FeelValue::Duration(FeelDuration::days_time(delta)))
    }

    fn date_add_duration(&self, date: &FeelValue, duration: &FeelValue) -> EvalResult<FeelValue> {
        if any_null(&[date, duration]) {
            return Ok(FeelValue::Null);
        }
        self.add(expect_date(date)?, expect_duration(duration)?)
    }

    fn date_subtract_duration(
        &self,
        date: &FeelValue,
        duration: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[date, duration]) {
            return Ok(FeelValue::Null);
        }
        let negated = expect_duration(duration)?
            .negate()
            .ok_or_else(|| EvalError::overflow("date - duration"))?;
        self.add(expect_date(date)?, &negated)
    }
}
