//! ISO 8601 duration literals

use crate::combinators::{integer, unsigned_decimal, Input, PResult};
use crate::error::{LiteralError, LiteralResult};
use bigdecimal::BigDecimal;
use octofhir_feel_types::{FeelDuration, ValueError};
use std::str::FromStr;
use winnow::combinator::{fail, opt, terminated};
use winnow::prelude::*;

#[derive(Debug, Default)]
struct RawDuration<'a> {
    negative: bool,
    years: Option<i64>,
    months: Option<i64>,
    weeks: Option<i64>,
    days: Option<i64>,
    hours: Option<i64>,
    minutes: Option<i64>,
    seconds: Option<&'a str>,
}

impl RawDuration<'_> {
    fn has_calendar_part(&self) -> bool {
        self.years.is_some() || self.months.is_some()
    }

    fn has_time_part(&self) -> bool {
        self.weeks.is_some()
            || self.days.is_some()
            || self.hours.is_some()
            || self.minutes.is_some()
            || self.seconds.is_some()
    }
}

fn time_designators<'a>(input: &mut Input<'a>, raw: &mut RawDuration<'a>) -> PResult<()> {
    raw.hours = opt(terminated(integer, 'H')).parse_next(input)?;
    raw.minutes = opt(terminated(integer, 'M')).parse_next(input)?;
    raw.seconds = opt(terminated(unsigned_decimal, 'S')).parse_next(input)?;
    Ok(())
}

fn duration_parts<'a>(input: &mut Input<'a>) -> PResult<RawDuration<'a>> {
    let mut raw = RawDuration {
        negative: opt('-').parse_next(input)?.is_some(),
        ..RawDuration::default()
    };
    'P'.parse_next(input)?;
    raw.years = opt(terminated(integer, 'Y')).parse_next(input)?;
    raw.months = opt(terminated(integer, 'M')).parse_next(input)?;
    raw.weeks = opt(terminated(integer, 'W')).parse_next(input)?;
    raw.days = opt(terminated(integer, 'D')).parse_next(input)?;
    if opt('T').parse_next(input)?.is_some() {
        let before = input.len();
        time_designators(input, &mut raw)?;
        if input.len() == before {
            // `T` must introduce at least one component
            return fail.parse_next(input);
        }
    }
    Ok(raw)
}

fn checked_seconds(raw: &RawDuration<'_>, text: &str) -> LiteralResult<BigDecimal> {
    let overflow = || LiteralError::from(ValueError::out_of_range(format!("duration '{text}'")));
    let days = raw
        .weeks
        .unwrap_or(0)
        .checked_mul(7)
        .and_then(|d| d.checked_add(raw.days.unwrap_or(0)))
        .ok_or_else(overflow)?;
    let whole = [
        (days, 86_400),
        (raw.hours.unwrap_or(0), 3600),
        (raw.minutes.unwrap_or(0), 60),
    ]
    .iter()
    .map(|(count, unit)| BigDecimal::from(*count) * BigDecimal::from(*unit))
    .fold(BigDecimal::from(0), |acc, part| acc + part);
    let seconds = match raw.seconds {
        Some(digits) => {
            BigDecimal::from_str(digits).map_err(|_| LiteralError::malformed("duration", text))?
        }
        None => BigDecimal::from(0),
    };
    Ok(whole + seconds)
}

/// Parse a duration literal such as `P1Y2M`, `-PT1.5S` or `P2DT3H`
///
/// A literal combining years or months with weeks, days or time parts does
/// not belong to either duration subtype and is rejected.
pub fn parse_duration(text: &str) -> LiteralResult<FeelDuration> {
    let raw = duration_parts
        .parse(text.trim())
        .map_err(|_| LiteralError::malformed("duration", text))?;

    let duration = match (raw.has_calendar_part(), raw.has_time_part()) {
        (false, false) => return Err(LiteralError::malformed("duration", text)),
        (true, true) => {
            return Err(LiteralError::MixedDuration {
                text: text.to_string(),
            });
        }
        (true, false) => FeelDuration::years_months(raw.years.unwrap_or(0), raw.months.unwrap_or(0))?,
        (false, true) => FeelDuration::from_seconds(&checked_seconds(&raw, text)?)?,
    };

    if raw.negative {
        duration
            .negate()
            .ok_or_else(|| ValueError::out_of_range(format!("duration '{text}'")).into())
    } else {
        Ok(duration)
    }
}
