//! FEEL values - runtime representation of the FEEL value domain
//!
//! [`FeelValue`] is a closed union over every FEEL type. `Null` is a regular
//! member of the domain and stands for an unknown or absent value.

use crate::context::FeelContext;
use crate::duration::FeelDuration;
use crate::function::FeelFunction;
use crate::number::to_plain_string;
use crate::range::FeelRange;
use crate::system_types::FeelType;
use crate::temporal::{FeelDate, FeelDateTime, FeelTime};
use bigdecimal::BigDecimal;
use std::fmt;

/// The primary value type for FEEL runtime values.
///
/// The derived `PartialEq` is structural (numbers compare by value, temporal
/// values compare local fields and qualifiers). FEEL `=` semantics live in the
/// evaluator's comparators.
#[derive(Debug, Clone, PartialEq)]
pub enum FeelValue {
    /// Unknown / absent value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Decimal number
    Number(BigDecimal),
    /// String value
    String(String),
    /// Calendar date
    Date(FeelDate),
    /// Time of day
    Time(FeelTime),
    /// Date and time
    DateTime(FeelDateTime),
    /// Years and months or days and time duration
    Duration(FeelDuration),
    /// Ordered list; may hold nulls and nested lists
    List(Vec<FeelValue>),
    /// Context
    Context(FeelContext),
    /// Range
    Range(FeelRange),
    /// Function descriptor
    Function(FeelFunction),
}

impl FeelValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is boolean `true`
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    /// Check if this value is boolean `false`
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Boolean(false))
    }

    /// Get the FEEL type of this value
    pub fn get_type(&self) -> FeelType {
        match self {
            Self::Null => FeelType::Null,
            Self::Boolean(_) => FeelType::Boolean,
            Self::Number(_) => FeelType::Number,
            Self::String(_) => FeelType::String,
            Self::Date(_) => FeelType::Date,
            Self::Time(_) => FeelType::Time,
            Self::DateTime(_) => FeelType::DateAndTime,
            Self::Duration(d) => d.feel_type(),
            Self::List(_) => FeelType::List,
            Self::Context(_) => FeelType::Context,
            Self::Range(_) => FeelType::Range,
            Self::Function(_) => FeelType::Function,
        }
    }

    /// Get as boolean if this is a Boolean value
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if this is a Number value
    pub fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get as string if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&FeelDate> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&FeelTime> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&FeelDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&FeelDuration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }

    /// Get as list if this is a List value
    pub fn as_list(&self) -> Option<&[FeelValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_context(&self) -> Option<&FeelContext> {
        match self {
            Self::Context(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&FeelRange> {
        match self {
            Self::Range(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FeelFunction> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Create a null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a number value
    pub fn number(value: impl Into<BigDecimal>) -> Self {
        Self::Number(value.into())
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a list value
    pub fn list(items: impl IntoIterator<Item = FeelValue>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Write the value as it appears inside a list, context or range
    ///
    /// Strings are quoted; everything else renders as at top level.
    pub(crate) fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for FeelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&to_plain_string(n)),
            Self::String(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Duration(d) => write!(f, "{d}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Self::Context(c) => write!(f, "{c}"),
            Self::Range(r) => write!(f, "{r}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

impl From<bool> for FeelValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Ternary booleans: `None` is unknown
impl From<Option<bool>> for FeelValue {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Null, Self::Boolean)
    }
}

impl From<i32> for FeelValue {
    fn from(value: i32) -> Self {
        Self::Number(BigDecimal::from(value))
    }
}

impl From<i64> for FeelValue {
    fn from(value: i64) -> Self {
        Self::Number(BigDecimal::from(value))
    }
}

impl From<usize> for FeelValue {
    fn from(value: usize) -> Self {
        Self::Number(BigDecimal::from(value as u64))
    }
}

impl From<BigDecimal> for FeelValue {
    fn from(value: BigDecimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FeelValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FeelValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<FeelDate> for FeelValue {
    fn from(value: FeelDate) -> Self {
        Self::Date(value)
    }
}

impl From<FeelTime> for FeelValue {
    fn from(value: FeelTime) -> Self {
        Self::Time(value)
    }
}

impl From<FeelDateTime> for FeelValue {
    fn from(value: FeelDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<FeelDuration> for FeelValue {
    fn from(value: FeelDuration) -> Self {
        Self::Duration(value)
    }
}

impl From<Vec<FeelValue>> for FeelValue {
    fn from(value: Vec<FeelValue>) -> Self {
        Self::List(value)
    }
}

impl From<FeelContext> for FeelValue {
    fn from(value: FeelContext) -> Self {
        Self::Context(value)
    }
}

impl From<FeelRange> for FeelValue {
    fn from(value: FeelRange) -> Self {
        Self::Range(value)
    }
}

impl From<FeelFunction> for FeelValue {
    fn from(value: FeelFunction) -> Self {
        Self::Function(value)
    }
}
