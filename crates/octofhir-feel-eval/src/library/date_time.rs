//! Date and time functions
//!
//! Implements the temporal constructors (`date`, `time`, `date and time`,
//! `duration`, `years and months duration`), component extraction and the
//! calendar functions `day of year`, `day of week`, `month of year` and
//! `week of year`.
//!
//! Malformed literals and out-of-range components are null.

use crate::error::{EvalError, EvalResult};
use crate::operators::model::{
    any_null, expect_duration, expect_integer, expect_number, expect_string, expect_time,
};
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{Datelike, NaiveDateTime, TimeDelta};
use num_traits::ToPrimitive;
use octofhir_feel_parser::{parse_date, parse_date_time, parse_duration, parse_time};
use octofhir_feel_types::{
    FeelDate, FeelDateTime, FeelDuration, FeelTime, FeelValue, ZoneQualifier,
};
use std::fmt::Display;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Null for a construction failure, logged at debug level
fn or_null<T, E>(function: &str, result: Result<T, E>) -> FeelValue
where
    T: Into<FeelValue>,
    E: Display,
{
    match result {
        Ok(value) => value.into(),
        Err(e) => {
            log::debug!("{function} is null: {e}");
            FeelValue::Null
        }
    }
}

/// Calendar fields of a date or a date and time
fn calendar_date(function: &str, value: &FeelValue) -> EvalResult<FeelDate> {
    match value {
        FeelValue::Date(date) => Ok(*date),
        FeelValue::DateTime(dt) => Ok(dt.date()),
        other => Err(EvalError::unexpected(
            format!("date or date and time for {function}"),
            other,
        )),
    }
}

/// Clock fields of a time or a date and time
fn clock_time(function: &str, value: &FeelValue) -> EvalResult<FeelTime> {
    match value {
        FeelValue::Time(time) => Ok(*time),
        FeelValue::DateTime(dt) => Ok(dt.time()),
        other => Err(EvalError::unexpected(
            format!("time or date and time for {function}"),
            other,
        )),
    }
}

/// Local reading of a date (at midnight) or a date and time
fn local_date_time(function: &str, value: &FeelValue) -> EvalResult<NaiveDateTime> {
    match value {
        FeelValue::Date(date) => Ok(date.at_midnight()),
        FeelValue::DateTime(dt) => Ok(dt.naive()),
        other => Err(EvalError::unexpected(
            format!("date or date and time for {function}"),
            other,
        )),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeLib;

impl DateTimeLib {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    /// `date(from)` from a string, date or date and time
    pub fn date(&self, from: &FeelValue) -> EvalResult<FeelValue> {
        match from {
            FeelValue::Null => Ok(FeelValue::Null),
            FeelValue::String(text) => Ok(or_null("date", parse_date(text))),
            other => Ok(FeelValue::Date(calendar_date("date", other)?)),
        }
    }

    /// `date(year, month, day)`
    pub fn date_from_parts(
        &self,
        year: &FeelValue,
        month: &FeelValue,
        day: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[year, month, day]) {
            return Ok(FeelValue::Null);
        }
        let date = FeelDate::new(
            expect_integer("date", year)?,
            expect_integer("date", month)?,
            expect_integer("date", day)?,
        );
        Ok(or_null("date", date))
    }

    /// `time(from)` from a string, time, date or date and time
    ///
    /// A date converts to midnight UTC.
    pub fn time(&self, from: &FeelValue) -> EvalResult<FeelValue> {
        match from {
            FeelValue::Null => Ok(FeelValue::Null),
            FeelValue::String(text) => Ok(or_null("time", parse_time(text))),
            FeelValue::Time(time) => Ok(FeelValue::Time(*time)),
            FeelValue::DateTime(dt) => Ok(FeelValue::Time(dt.time())),
            FeelValue::Date(_) => Ok(or_null(
                "time",
                FeelTime::new(0, 0, 0, 0, Some(ZoneQualifier::utc())),
            )),
            other => Err(EvalError::unexpected("string or temporal value", other)),
        }
    }

    /// `time(hour, minute, second, offset?)`
    ///
    /// `second` may carry a fraction; `offset` is a days and time duration.
    pub fn time_from_parts(
        &self,
        hour: &FeelValue,
        minute: &FeelValue,
        second: &FeelValue,
        offset: Option<&FeelValue>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[hour, minute, second]) {
            return Ok(FeelValue::Null);
        }
        let seconds = expect_number(second)?;
        let whole = seconds.with_scale_round(0, RoundingMode::Down);
        let nanos = ((seconds - &whole) * BigDecimal::from(1_000_000_000))
            .with_scale_round(0, RoundingMode::Down);
        let (Some(whole), Some(nanos)) = (whole.to_i64(), nanos.to_i64()) else {
            return Ok(FeelValue::Null);
        };
        let zone = match offset {
            None | Some(FeelValue::Null) => None,
            Some(offset) => {
                let delta = expect_duration(offset)?.delta().ok_or_else(|| {
                    EvalError::invalid_operand("time", "offset must be a days and time duration")
                })?;
                let seconds = i32::try_from(delta.num_seconds())
                    .map_err(|_| EvalError::overflow("time offset"))?;
                match ZoneQualifier::offset(seconds) {
                    Ok(zone) => Some(zone),
                    Err(e) => return Ok(or_null::<FeelTime, _>("time", Err(e))),
                }
            }
        };
        let time = FeelTime::new(
            expect_integer("time", hour)?,
            expect_integer("time", minute)?,
            whole,
            nanos,
            zone,
        );
        Ok(or_null("time", time))
    }

    /// `date and time(from)` from a string, date or date and time
    ///
    /// A date, or a string holding only a date, converts to naive midnight.
    pub fn date_and_time(&self, from: &FeelValue) -> EvalResult<FeelValue> {
        match from {
            FeelValue::Null => Ok(FeelValue::Null),
            FeelValue::String(text) if text.contains(['T', 't']) => {
                Ok(or_null("date and time", parse_date_time(text)))
            }
            FeelValue::String(text) => Ok(or_null(
                "date and time",
                parse_date(text).map(FeelDateTime::from_date),
            )),
            FeelValue::Date(date) => Ok(FeelValue::DateTime(FeelDateTime::from_date(*date))),
            FeelValue::DateTime(dt) => Ok(FeelValue::DateTime(*dt)),
            other => Err(EvalError::unexpected("string, date or date and time", other)),
        }
    }

    /// `date and time(date, time)`; the time's qualifier is kept
    pub fn date_and_time_from_parts(
        &self,
        date: &FeelValue,
        time: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[date, time]) {
            return Ok(FeelValue::Null);
        }
        let date = calendar_date("date and time", date)?;
        let time = expect_time(time)?;
        Ok(FeelValue::DateTime(FeelDateTime::new(date, *time)))
    }

    pub fn duration(&self, from: &FeelValue) -> EvalResult<FeelValue> {
        if from.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(or_null("duration", parse_duration(expect_string(from)?)))
    }

    /// Whole months between two dates or date and times
    pub fn years_and_months_duration(
        &self,
        from: &FeelValue,
        to: &FeelValue,
    ) -> EvalResult<FeelValue> {
        if any_null(&[from, to]) {
            return Ok(FeelValue::Null);
        }
        let start = local_date_time("years and months duration", from)?;
        let end = local_date_time("years and months duration", to)?;
        let mut months = i64::from(end.year() - start.year()) * 12
            + i64::from(end.month()) - i64::from(start.month());
        let start_rest = (start.day(), start.time());
        let end_rest = (end.day(), end.time());
        if months > 0 && end_rest < start_rest {
            months -= 1;
        } else if months < 0 && end_rest > start_rest {
            months += 1;
        }
        Ok(FeelValue::Duration(FeelDuration::from_months(months)))
    }

    // ------------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------------

    fn date_component(
        &self,
        function: &str,
        value: &FeelValue,
        op: impl FnOnce(&FeelDate) -> FeelValue,
    ) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(op(&calendar_date(function, value)?))
    }

    fn time_component(
        &self,
        function: &str,
        value: &FeelValue,
        op: impl FnOnce(&FeelTime) -> FeelValue,
    ) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(op(&clock_time(function, value)?))
    }

    pub fn year(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("year", value, |d| FeelValue::from(d.year()))
    }

    pub fn month(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("month", value, |d| FeelValue::from(i64::from(d.month())))
    }

    pub fn day(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("day", value, |d| FeelValue::from(i64::from(d.day())))
    }

    /// ISO weekday, Monday = 1
    pub fn weekday(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("weekday", value, |d| FeelValue::from(i64::from(d.weekday())))
    }

    pub fn hour(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.time_component("hour", value, |t| FeelValue::from(i64::from(t.hour())))
    }

    pub fn minute(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.time_component("minute", value, |t| FeelValue::from(i64::from(t.minute())))
    }

    pub fn second(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.time_component("second", value, |t| FeelValue::from(i64::from(t.second())))
    }

    /// Offset as a days and time duration; null for naive values
    pub fn time_offset(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        let offset = match value {
            FeelValue::Null => return Ok(FeelValue::Null),
            FeelValue::DateTime(dt) => dt.offset(),
            other => clock_time("time offset", other)?.offset(),
        };
        Ok(offset.map_or(FeelValue::Null, |offset| {
            FeelValue::Duration(FeelDuration::days_time(TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            ))))
        }))
    }

    /// Zone id; null for naive and offset-qualified values
    pub fn timezone(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.time_component("timezone", value, |t| {
            t.zone()
                .and_then(ZoneQualifier::zone_id)
                .map_or(FeelValue::Null, FeelValue::from)
        })
    }

    pub fn day_of_year(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("day of year", value, |d| {
            FeelValue::from(i64::from(d.day_of_year()))
        })
    }

    pub fn day_of_week(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("day of week", value, |d| {
            name_at(&DAY_NAMES, d.weekday())
        })
    }

    pub fn month_of_year(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("month of year", value, |d| {
            name_at(&MONTH_NAMES, d.month())
        })
    }

    /// ISO 8601 week number
    pub fn week_of_year(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.date_component("week of year", value, |d| {
            FeelValue::from(i64::from(d.iso_week()))
        })
    }

    // ------------------------------------------------------------------------
    // Duration components
    // ------------------------------------------------------------------------

    fn duration_component(
        &self,
        value: &FeelValue,
        op: impl FnOnce(&FeelDuration) -> Option<FeelValue>,
    ) -> EvalResult<FeelValue> {
        if value.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(op(expect_duration(value)?).unwrap_or(FeelValue::Null))
    }

    pub fn years(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.duration_component(value, |d| {
            d.total_months().map(|_| FeelValue::from(d.years()))
        })
    }

    pub fn months(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.duration_component(value, |d| {
            d.total_months().map(|_| FeelValue::from(d.months()))
        })
    }

    pub fn days(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.duration_component(value, |d| d.delta().map(|_| FeelValue::from(d.days())))
    }

    pub fn hours(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.duration_component(value, |d| d.delta().map(|_| FeelValue::from(d.hours())))
    }

    pub fn minutes(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.duration_component(value, |d| d.delta().map(|_| FeelValue::from(d.minutes())))
    }

    pub fn seconds(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.duration_component(value, |d| {
            d.delta().map(|_| FeelValue::Number(d.seconds()))
        })
    }
}

fn name_at(names: &[&str], one_based: u32) -> FeelValue {
    usize::try_from(one_based)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| names.get(i))
        .map_or(FeelValue::Null, |name| FeelValue::from(*name))
}
