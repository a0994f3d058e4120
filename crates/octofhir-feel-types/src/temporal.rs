//! Calendar values: date, time and date and time
//!
//! Time and date-and-time values carry an optional [`ZoneQualifier`]. A value
//! without a qualifier is *naive*; the derived `PartialEq` compares local
//! fields and the qualifier structurally, which is what FEEL `is` needs.
//! Instant-based comparisons go through [`FeelTime::utc_nanos_of_day`] and
//! [`FeelDateTime::instant_nanos`].

use crate::error::{ValueError, ValueResult};
use chrono::{
    Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
    Timelike, Utc,
};
use chrono_tz::Tz;
use std::fmt;

/// Offsets must stay strictly below this magnitude
pub const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// Offset or zone attached to a time or date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneQualifier {
    /// Fixed offset from UTC; `Z` is stored as a zero offset
    Offset(FixedOffset),
    /// IANA zone id such as `Europe/Paris`
    Zone(Tz),
}

impl ZoneQualifier {
    /// The `Z` qualifier
    pub fn utc() -> Self {
        Self::Offset(Utc.fix())
    }

    /// Fixed offset in seconds east of UTC
    pub fn offset(seconds: i32) -> ValueResult<Self> {
        if seconds.abs() >= MAX_OFFSET_SECONDS {
            return Err(ValueError::InvalidOffset {
                seconds: i64::from(seconds),
            });
        }
        FixedOffset::east_opt(seconds)
            .map(Self::Offset)
            .ok_or(ValueError::InvalidOffset {
                seconds: i64::from(seconds),
            })
    }

    /// Zone looked up by IANA id
    pub fn zone(id: &str) -> ValueResult<Self> {
        id.parse::<Tz>()
            .map(Self::Zone)
            .map_err(|_| ValueError::UnknownZone {
                zone: id.to_string(),
            })
    }

    /// Check if this qualifier is a zone id rather than an offset
    pub fn is_zone_id(&self) -> bool {
        matches!(self, Self::Zone(_))
    }

    /// IANA id of a zone qualifier
    pub fn zone_id(&self) -> Option<&'static str> {
        match self {
            Self::Zone(tz) => Some(tz.name()),
            Self::Offset(_) => None,
        }
    }

    /// Offset in effect at a local date and time
    ///
    /// Local times skipped by a transition resolve with the offset in effect
    /// at the same UTC reading.
    pub fn offset_at(&self, local: &NaiveDateTime) -> FixedOffset {
        match self {
            Self::Offset(offset) => *offset,
            Self::Zone(tz) => tz
                .offset_from_local_datetime(local)
                .earliest()
                .map(|offset| offset.fix())
                .unwrap_or_else(|| tz.offset_from_utc_datetime(local).fix()),
        }
    }
}

impl fmt::Display for ZoneQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => write_offset(f, offset.local_minus_utc()),
            Self::Zone(tz) => write!(f, "@{}", tz.name()),
        }
    }
}

fn write_offset(f: &mut fmt::Formatter<'_>, seconds: i32) -> fmt::Result {
    if seconds == 0 {
        return f.write_str("Z");
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    write!(f, "{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)?;
    if abs % 60 != 0 {
        write!(f, ":{:02}", abs % 60)?;
    }
    Ok(())
}

fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}

fn write_time(f: &mut fmt::Formatter<'_>, time: &NaiveTime) -> fmt::Result {
    write!(f, "{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())?;
    let nanos = time.nanosecond();
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        write!(f, ".{}", fraction.trim_end_matches('0'))?;
    }
    Ok(())
}

fn check_component(component: &str, value: i64, min: i64, max: i64) -> ValueResult<u32> {
    if (min..=max).contains(&value) {
        u32::try_from(value).map_err(|_| ValueError::invalid_component(component, value))
    } else {
        Err(ValueError::invalid_component(component, value))
    }
}

// ============================================================================
// Date
// ============================================================================

/// Calendar date without time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeelDate {
    date: NaiveDate,
}

impl FeelDate {
    /// Create a date from year, month and day
    pub fn new(year: i64, month: i64, day: i64) -> ValueResult<Self> {
        let month = check_component("month", month, 1, 12)?;
        let day = check_component("day", day, 1, 31)?;
        let year32 = i32::try_from(year).map_err(|_| ValueError::invalid_component("year", year))?;
        NaiveDate::from_ymd_opt(year32, month, day)
            .map(Self::from_naive)
            .ok_or_else(|| ValueError::invalid_component("date", format!("{year}-{month}-{day}")))
    }

    /// Wrap a chrono date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The underlying chrono date
    pub fn naive(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// ISO weekday, Monday = 1 through Sunday = 7
    pub fn weekday(&self) -> u32 {
        self.date.weekday().number_from_monday()
    }

    /// Day of the year starting at 1
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    /// ISO 8601 week number
    pub fn iso_week(&self) -> u32 {
        self.date.iso_week().week()
    }

    /// Midnight of this date
    pub fn at_midnight(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    /// Seconds from the epoch to midnight UTC of this date
    pub fn epoch_seconds(&self) -> i64 {
        self.at_midnight().and_utc().timestamp()
    }
}

impl fmt::Display for FeelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.date.year())?;
        write!(f, "-{:02}-{:02}", self.date.month(), self.date.day())
    }
}

// ============================================================================
// Time
// ============================================================================

/// Time of day with an optional offset or zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeelTime {
    time: NaiveTime,
    zone: Option<ZoneQualifier>,
}

impl FeelTime {
    /// Date used to resolve the offset of a zone-qualified time (1970-01-01)
    pub fn reference_date() -> NaiveDate {
        NaiveDate::default()
    }

    /// Create a time from components; `nanos` is the fraction of the second
    pub fn new(
        hour: i64,
        minute: i64,
        second: i64,
        nanos: i64,
        zone: Option<ZoneQualifier>,
    ) -> ValueResult<Self> {
        let hour = check_component("hour", hour, 0, 23)?;
        let minute = check_component("minute", minute, 0, 59)?;
        let second = check_component("second", second, 0, 59)?;
        let nanos = check_component("fraction of second", nanos, 0, NANOS_PER_SECOND - 1)?;
        NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
            .map(|time| Self::from_naive(time, zone))
            .ok_or_else(|| ValueError::invalid_component("time", format!("{hour}:{minute}:{second}")))
    }

    /// Wrap a chrono time
    pub fn from_naive(time: NaiveTime, zone: Option<ZoneQualifier>) -> Self {
        Self { time, zone }
    }

    /// The local time of day
    pub fn naive(&self) -> NaiveTime {
        self.time
    }

    pub fn zone(&self) -> Option<&ZoneQualifier> {
        self.zone.as_ref()
    }

    /// Check if the time carries an offset or zone
    pub fn is_aware(&self) -> bool {
        self.zone.is_some()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    /// Offset of the qualifier, zones resolved at [`Self::reference_date`]
    pub fn offset(&self) -> Option<FixedOffset> {
        self.zone
            .map(|zone| zone.offset_at(&Self::reference_date().and_time(self.time)))
    }

    /// Nanoseconds since local midnight
    pub fn local_nanos_of_day(&self) -> i64 {
        i64::from(self.time.num_seconds_from_midnight()) * NANOS_PER_SECOND
            + i64::from(self.time.nanosecond())
    }

    /// Nanoseconds since midnight UTC; naive times count as UTC
    pub fn utc_nanos_of_day(&self) -> i64 {
        let offset = self.offset().map_or(0, |o| i64::from(o.local_minus_utc()));
        (self.local_nanos_of_day() - offset * NANOS_PER_SECOND).rem_euclid(NANOS_PER_DAY)
    }

    /// Shift the local time, wrapping around midnight
    pub fn add_delta(&self, delta: TimeDelta) -> Self {
        let (time, _) = self.time.overflowing_add_signed(delta);
        Self::from_naive(time, self.zone)
    }
}

impl fmt::Display for FeelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_time(f, &self.time)?;
        match &self.zone {
            Some(zone) => write!(f, "{zone}"),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Date and time
// ============================================================================

/// Date and time of day with an optional offset or zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeelDateTime {
    date_time: NaiveDateTime,
    zone: Option<ZoneQualifier>,
}

impl FeelDateTime {
    /// Combine a date with a time, keeping the time's qualifier
    pub fn new(date: FeelDate, time: FeelTime) -> Self {
        Self {
            date_time: date.naive().and_time(time.naive()),
            zone: time.zone,
        }
    }

    /// Wrap a chrono date and time
    pub fn from_naive(date_time: NaiveDateTime, zone: Option<ZoneQualifier>) -> Self {
        Self { date_time, zone }
    }

    /// Midnight of `date`, naive
    pub fn from_date(date: FeelDate) -> Self {
        Self::from_naive(date.at_midnight(), None)
    }

    /// The local date and time
    pub fn naive(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn zone(&self) -> Option<&ZoneQualifier> {
        self.zone.as_ref()
    }

    /// Check if the value carries an offset or zone
    pub fn is_aware(&self) -> bool {
        self.zone.is_some()
    }

    /// Local date part
    pub fn date(&self) -> FeelDate {
        FeelDate::from_naive(self.date_time.date())
    }

    /// Local time part with the same qualifier
    pub fn time(&self) -> FeelTime {
        FeelTime::from_naive(self.date_time.time(), self.zone)
    }

    /// Offset in effect at this local date and time
    pub fn offset(&self) -> Option<FixedOffset> {
        self.zone.map(|zone| zone.offset_at(&self.date_time))
    }

    /// Nanoseconds since the epoch; naive values count as UTC
    pub fn instant_nanos(&self) -> i128 {
        let offset = self.offset().map_or(0, |o| i128::from(o.local_minus_utc()));
        let utc = self.date_time.and_utc();
        (i128::from(utc.timestamp()) - offset) * i128::from(NANOS_PER_SECOND)
            + i128::from(utc.timestamp_subsec_nanos())
    }

    /// The UTC reading of this value; naive values count as UTC
    pub fn utc_naive(&self) -> Option<NaiveDateTime> {
        let offset = self.offset().map_or(0, |o| i64::from(o.local_minus_utc()));
        self.date_time.checked_sub_signed(TimeDelta::seconds(offset))
    }

    /// Move the value by an exact amount of time
    ///
    /// Zone-qualified values move on the UTC time line and are re-expressed
    /// in the zone; other values shift their local reading.
    pub fn add_delta(&self, delta: TimeDelta) -> Option<Self> {
        match self.zone {
            Some(ZoneQualifier::Zone(tz)) => {
                let utc = self.utc_naive()?.checked_add_signed(delta)?;
                let local = tz.from_utc_datetime(&utc).naive_local();
                Some(Self::from_naive(local, self.zone))
            }
            _ => self
                .date_time
                .checked_add_signed(delta)
                .map(|date_time| Self::from_naive(date_time, self.zone)),
        }
    }
}

impl fmt::Display for FeelDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T", self.date())?;
        write!(f, "{}", self.time())
    }
}
