//! FEEL system types

use serde::{Deserialize, Serialize};
use std::fmt;

/// FEEL runtime types
///
/// Every [`crate::FeelValue`] variant maps to exactly one of these. Durations
/// split into their two subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelType {
    /// Type of the null value
    Null,
    /// Boolean type
    Boolean,
    /// Decimal number type
    Number,
    /// String type
    String,
    /// Calendar date
    Date,
    /// Time of day, optionally qualified by an offset or zone
    Time,
    /// Date and time, optionally qualified by an offset or zone
    DateAndTime,
    /// Years and months duration
    YearsAndMonthsDuration,
    /// Days and time duration
    DaysAndTimeDuration,
    /// List type
    List,
    /// Context type
    Context,
    /// Range type
    Range,
    /// Function type
    Function,
}

impl FeelType {
    /// Get the FEEL name of the type
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateAndTime => "date and time",
            Self::YearsAndMonthsDuration => "years and months duration",
            Self::DaysAndTimeDuration => "days and time duration",
            Self::List => "list",
            Self::Context => "context",
            Self::Range => "range",
            Self::Function => "function",
        }
    }

    /// Check if values of this type have a total order
    pub const fn is_ordered(&self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::String
                | Self::Date
                | Self::Time
                | Self::DateAndTime
                | Self::YearsAndMonthsDuration
                | Self::DaysAndTimeDuration
        )
    }

    /// Check if this is a temporal type (date, time or date and time)
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateAndTime)
    }

    /// Check if this is one of the duration subtypes
    pub const fn is_duration(&self) -> bool {
        matches!(self, Self::YearsAndMonthsDuration | Self::DaysAndTimeDuration)
    }
}

impl fmt::Display for FeelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
