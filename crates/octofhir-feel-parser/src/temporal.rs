//! Date, time and date and time literals

use crate::combinators::{fraction, two_digits, Input, PResult};
use crate::error::{LiteralError, LiteralResult};
use octofhir_feel_types::{FeelDate, FeelDateTime, FeelTime, ValueError, ZoneQualifier};
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Largest year magnitude accepted in literals
const MAX_YEAR_DIGITS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawDate {
    year: i64,
    month: i64,
    day: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RawZone {
    Naive,
    Utc,
    Offset { negative: bool, hours: i64, minutes: i64 },
    Id(String),
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawTime {
    hour: i64,
    minute: i64,
    second: i64,
    nanos: i64,
    zone: RawZone,
}

fn date_parts(input: &mut Input<'_>) -> PResult<RawDate> {
    let negative = opt('-').parse_next(input)?.is_some();
    let year = take_while(4..=MAX_YEAR_DIGITS, |c: char| c.is_ascii_digit())
        .try_map(|digits: &str| digits.parse::<i64>())
        .parse_next(input)?;
    '-'.parse_next(input)?;
    let month = two_digits(input)?;
    '-'.parse_next(input)?;
    let day = two_digits(input)?;
    Ok(RawDate {
        year: if negative { -year } else { year },
        month,
        day,
    })
}

fn zone_id<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    preceded(
        '@',
        take_while(1.., |c: char| {
            c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+')
        }),
    )
    .parse_next(input)
}

fn offset_parts(input: &mut Input<'_>) -> PResult<RawZone> {
    let negative = one_of(['+', '-']).parse_next(input)? == '-';
    let hours = two_digits(input)?;
    opt(':').parse_next(input)?;
    let minutes = two_digits(input)?;
    Ok(RawZone::Offset {
        negative,
        hours,
        minutes,
    })
}

fn zone_suffix(input: &mut Input<'_>) -> PResult<RawZone> {
    let offset = if opt(one_of(['Z', 'z'])).parse_next(input)?.is_some() {
        Some(RawZone::Utc)
    } else {
        opt(offset_parts).parse_next(input)?
    };
    let id = opt(zone_id).parse_next(input)?;
    Ok(match (offset, id) {
        (None, None) => RawZone::Naive,
        (Some(offset), None) => offset,
        (None, Some(id)) => RawZone::Id(id.to_string()),
        (Some(_), Some(_)) => RawZone::Conflict,
    })
}

fn time_parts(input: &mut Input<'_>) -> PResult<RawTime> {
    let hour = two_digits(input)?;
    ':'.parse_next(input)?;
    let minute = two_digits(input)?;
    ':'.parse_next(input)?;
    let second = two_digits(input)?;
    let nanos = opt(fraction).parse_next(input)?.unwrap_or(0);
    let zone = zone_suffix(input)?;
    Ok(RawTime {
        hour,
        minute,
        second,
        nanos,
        zone,
    })
}

fn date_time_parts(input: &mut Input<'_>) -> PResult<(RawDate, RawTime)> {
    let date = date_parts(input)?;
    one_of(['T', 't']).parse_next(input)?;
    let time = time_parts(input)?;
    Ok((date, time))
}

fn build_date(raw: &RawDate) -> LiteralResult<FeelDate> {
    Ok(FeelDate::new(raw.year, raw.month, raw.day)?)
}

fn build_zone(raw: &RawZone, text: &str) -> LiteralResult<Option<ZoneQualifier>> {
    match raw {
        RawZone::Naive => Ok(None),
        RawZone::Utc => Ok(Some(ZoneQualifier::utc())),
        RawZone::Offset {
            negative,
            hours,
            minutes,
        } => {
            if *minutes > 59 {
                return Err(ValueError::invalid_component("offset minutes", minutes).into());
            }
            let seconds = i32::try_from(hours * 3600 + minutes * 60)
                .map_err(|_| ValueError::invalid_component("offset hours", hours))?;
            let seconds = if *negative { -seconds } else { seconds };
            Ok(Some(ZoneQualifier::offset(seconds)?))
        }
        RawZone::Id(id) => Ok(Some(ZoneQualifier::zone(id)?)),
        RawZone::Conflict => Err(LiteralError::ConflictingZone {
            text: text.to_string(),
        }),
    }
}

fn build_time(raw: &RawTime, text: &str) -> LiteralResult<FeelTime> {
    let zone = build_zone(&raw.zone, text)?;
    Ok(FeelTime::new(raw.hour, raw.minute, raw.second, raw.nanos, zone)?)
}

/// Parse a date literal `YYYY-MM-DD`
pub fn parse_date(text: &str) -> LiteralResult<FeelDate> {
    let raw = date_parts
        .parse(text.trim())
        .map_err(|_| LiteralError::malformed("date", text))?;
    build_date(&raw)
}

/// Parse a time literal, optionally prefixed with `T`
pub fn parse_time(text: &str) -> LiteralResult<FeelTime> {
    let raw = preceded(opt(one_of(['T', 't'])), time_parts)
        .parse(text.trim())
        .map_err(|_| LiteralError::malformed("time", text))?;
    build_time(&raw, text)
}

/// Parse a date and time literal `YYYY-MM-DDTHH:MM:SS[...]`
pub fn parse_date_time(text: &str) -> LiteralResult<FeelDateTime> {
    let (date, time) = date_time_parts
        .parse(text.trim())
        .map_err(|_| LiteralError::malformed("date and time", text))?;
    Ok(FeelDateTime::new(build_date(&date)?, build_time(&time, text)?))
}
