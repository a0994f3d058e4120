//! FEEL durations
//!
//! Years-and-months durations count calendar months; days-and-time durations
//! are an exact amount of time. The two subtypes never mix.

use crate::error::{ValueError, ValueResult};
use crate::system_types::FeelType;
use crate::temporal::NANOS_PER_SECOND;
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::TimeDelta;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;

/// Duration subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationKind {
    /// Calendar based, counted in months
    YearsAndMonths,
    /// Exact, counted in seconds
    DaysAndTime,
}

impl DurationKind {
    pub fn feel_type(self) -> FeelType {
        match self {
            Self::YearsAndMonths => FeelType::YearsAndMonthsDuration,
            Self::DaysAndTime => FeelType::DaysAndTimeDuration,
        }
    }
}

/// A FEEL duration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeelDuration {
    /// Years and months duration stored as total months
    YearsMonths { months: i64 },
    /// Days and time duration
    DaysTime(TimeDelta),
}

impl FeelDuration {
    /// Create a years and months duration
    pub fn years_months(years: i64, months: i64) -> ValueResult<Self> {
        years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .map(Self::from_months)
            .ok_or_else(|| ValueError::out_of_range(format!("{years} years {months} months")))
    }

    /// Years and months duration from a month count
    pub fn from_months(months: i64) -> Self {
        Self::YearsMonths { months }
    }

    /// Days and time duration
    pub fn days_time(delta: TimeDelta) -> Self {
        Self::DaysTime(delta)
    }

    /// Days and time duration from a (possibly fractional) number of seconds
    pub fn from_seconds(seconds: &BigDecimal) -> ValueResult<Self> {
        seconds_to_delta(seconds)
            .map(Self::DaysTime)
            .ok_or_else(|| ValueError::out_of_range(format!("{seconds} seconds")))
    }

    pub fn kind(&self) -> DurationKind {
        match self {
            Self::YearsMonths { .. } => DurationKind::YearsAndMonths,
            Self::DaysTime(_) => DurationKind::DaysAndTime,
        }
    }

    pub fn feel_type(&self) -> FeelType {
        self.kind().feel_type()
    }

    /// Month count of a years and months duration
    pub fn total_months(&self) -> Option<i64> {
        match self {
            Self::YearsMonths { months } => Some(*months),
            Self::DaysTime(_) => None,
        }
    }

    /// Time delta of a days and time duration
    pub fn delta(&self) -> Option<TimeDelta> {
        match self {
            Self::DaysTime(delta) => Some(*delta),
            Self::YearsMonths { .. } => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::YearsMonths { months } => *months < 0,
            Self::DaysTime(delta) => *delta < TimeDelta::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::YearsMonths { months } => *months == 0,
            Self::DaysTime(delta) => delta.is_zero(),
        }
    }

    /// Same duration with the opposite sign
    pub fn negate(&self) -> Option<Self> {
        match self {
            Self::YearsMonths { months } => months.checked_neg().map(Self::from_months),
            Self::DaysTime(delta) => TimeDelta::zero().checked_sub(delta).map(Self::DaysTime),
        }
    }

    /// Magnitude of the duration in its own unit: months or seconds
    pub fn value(&self) -> BigDecimal {
        match self {
            Self::YearsMonths { months } => BigDecimal::from(*months),
            Self::DaysTime(delta) => delta_to_seconds(delta),
        }
    }

    /// Whole years, signed
    pub fn years(&self) -> i64 {
        self.total_months().map_or(0, |m| m / 12)
    }

    /// Months beyond whole years, signed
    pub fn months(&self) -> i64 {
        self.total_months().map_or(0, |m| m % 12)
    }

    /// Whole days, signed
    pub fn days(&self) -> i64 {
        self.delta().map_or(0, |d| d.num_days())
    }

    /// Hours beyond whole days, signed
    pub fn hours(&self) -> i64 {
        self.delta().map_or(0, |d| d.num_hours() % 24)
    }

    /// Minutes beyond whole hours, signed
    pub fn minutes(&self) -> i64 {
        self.delta().map_or(0, |d| d.num_minutes() % 60)
    }

    /// Seconds beyond whole minutes including the fraction, signed
    pub fn seconds(&self) -> BigDecimal {
        match self.delta() {
            Some(delta) => {
                let whole = delta.num_seconds() % 60;
                let nanos = i128::from(whole) * i128::from(NANOS_PER_SECOND)
                    + i128::from(delta.subsec_nanos());
                BigDecimal::new(BigInt::from(nanos), 9).normalized()
            }
            None => BigDecimal::from(0),
        }
    }
}

impl PartialOrd for FeelDuration {
    /// Durations order within a subtype only
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::YearsMonths { months: a }, Self::YearsMonths { months: b }) => Some(a.cmp(b)),
            (Self::DaysTime(a), Self::DaysTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for FeelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        match self {
            Self::YearsMonths { months } => {
                let total = months.unsigned_abs();
                let (years, months) = (total / 12, total % 12);
                f.write_str("P")?;
                if years != 0 {
                    write!(f, "{years}Y")?;
                }
                if months != 0 || years == 0 {
                    write!(f, "{months}M")?;
                }
                Ok(())
            }
            Self::DaysTime(delta) => {
                let nanos = (i128::from(delta.num_seconds()) * i128::from(NANOS_PER_SECOND)
                    + i128::from(delta.subsec_nanos()))
                .unsigned_abs();
                let nanos_per_second = u128::from(NANOS_PER_SECOND.unsigned_abs());
                let total_seconds = nanos / nanos_per_second;
                let fraction = nanos % nanos_per_second;
                let days = total_seconds / 86_400;
                let hours = total_seconds % 86_400 / 3600;
                let minutes = total_seconds % 3600 / 60;
                let seconds = total_seconds % 60;

                f.write_str("P")?;
                if days != 0 {
                    write!(f, "{days}D")?;
                }
                if hours == 0 && minutes == 0 && seconds == 0 && fraction == 0 {
                    return if days == 0 { f.write_str("T0S") } else { Ok(()) };
                }
                f.write_str("T")?;
                if hours != 0 {
                    write!(f, "{hours}H")?;
                }
                if minutes != 0 {
                    write!(f, "{minutes}M")?;
                }
                if seconds != 0 || fraction != 0 {
                    write!(f, "{seconds}")?;
                    if fraction != 0 {
                        let digits = format!("{fraction:09}");
                        write!(f, ".{}", digits.trim_end_matches('0'))?;
                    }
                    f.write_str("S")?;
                }
                Ok(())
            }
        }
    }
}

/// Seconds of a time delta as an exact decimal
pub fn delta_to_seconds(delta: &TimeDelta) -> BigDecimal {
    let nanos = i128::from(delta.num_seconds()) * i128::from(NANOS_PER_SECOND)
        + i128::from(delta.subsec_nanos());
    BigDecimal::new(BigInt::from(nanos), 9).normalized()
}

/// Time delta for a number of seconds, truncated to nanoseconds
pub fn seconds_to_delta(seconds: &BigDecimal) -> Option<TimeDelta> {
    let nanos = (seconds * &BigDecimal::from(NANOS_PER_SECOND))
        .with_scale_round(0, RoundingMode::Down)
        .to_i128()?;
    let per_second = i128::from(NANOS_PER_SECOND);
    let secs = i64::try_from(nanos.div_euclid(per_second)).ok()?;
    let subsec = u32::try_from(nanos.rem_euclid(per_second)).ok()?;
    TimeDelta::new(secs, subsec)
}
