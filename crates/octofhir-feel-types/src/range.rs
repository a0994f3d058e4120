//! FEEL ranges
//!
//! A range has two optional endpoints with independent inclusion flags. A
//! missing endpoint is unbounded. Construction checks that both endpoints
//! share one type and that the start does not come after the end; duration
//! endpoints only need the same subtype.

use crate::error::{ValueError, ValueResult};
use crate::system_types::FeelType;
use crate::value::FeelValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Operators of a unary range such as `< 10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeOperator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl RangeOperator {
    /// Parse an operator symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// FEEL range value
#[derive(Debug, Clone, PartialEq)]
pub struct FeelRange {
    start: Option<Box<FeelValue>>,
    start_included: bool,
    end: Option<Box<FeelValue>>,
    end_included: bool,
}

impl FeelRange {
    /// Create a validated range; a null endpoint is unbounded
    pub fn new(
        start_included: bool,
        start: Option<FeelValue>,
        end: Option<FeelValue>,
        end_included: bool,
    ) -> ValueResult<Self> {
        let start = start.filter(|v| !v.is_null());
        let end = end.filter(|v| !v.is_null());

        match (&start, &end) {
            (None, None) => return Err(ValueError::invalid_range("both endpoints are unbounded")),
            (Some(s), Some(e)) => validate_endpoints(s, e)?,
            (Some(point), None) | (None, Some(point)) => validate_point(point)?,
        }

        // Unbounded ends are never included
        let start_included = start_included && start.is_some();
        let end_included = end_included && end.is_some();
        Ok(Self {
            start: start.map(Box::new),
            start_included,
            end: end.map(Box::new),
            end_included,
        })
    }

    /// Create a closed range `[start..end]`
    pub fn closed(start: FeelValue, end: FeelValue) -> ValueResult<Self> {
        Self::new(true, Some(start), Some(end), true)
    }

    /// Create a half-open range `[start..end)`
    pub fn closed_open(start: FeelValue, end: FeelValue) -> ValueResult<Self> {
        Self::new(true, Some(start), Some(end), false)
    }

    /// Create an open range `(start..end)`
    pub fn open(start: FeelValue, end: FeelValue) -> ValueResult<Self> {
        Self::new(false, Some(start), Some(end), false)
    }

    /// Desugar a unary test such as `<= 10` into a range
    ///
    /// `!=` does not describe a contiguous range and is rejected.
    pub fn from_operator(operator: RangeOperator, endpoint: FeelValue) -> ValueResult<Self> {
        match operator {
            RangeOperator::Eq => Self::new(true, Some(endpoint.clone()), Some(endpoint), true),
            RangeOperator::Lt => Self::new(false, None, Some(endpoint), false),
            RangeOperator::Le => Self::new(false, None, Some(endpoint), true),
            RangeOperator::Gt => Self::new(false, Some(endpoint), None, false),
            RangeOperator::Ge => Self::new(true, Some(endpoint), None, false),
            RangeOperator::Ne => Err(ValueError::invalid_range(format!(
                "'{}' {} is not a contiguous range",
                operator, endpoint
            ))),
        }
    }

    /// Start endpoint; `None` when unbounded
    pub fn start(&self) -> Option<&FeelValue> {
        self.start.as_deref()
    }

    /// End endpoint; `None` when unbounded
    pub fn end(&self) -> Option<&FeelValue> {
        self.end.as_deref()
    }

    pub fn start_included(&self) -> bool {
        self.start_included
    }

    pub fn end_included(&self) -> bool {
        self.end_included
    }

    /// Type of the endpoints
    pub fn point_type(&self) -> FeelType {
        self.start()
            .or(self.end())
            .map_or(FeelType::Null, FeelValue::get_type)
    }
}

fn validate_point(point: &FeelValue) -> ValueResult<()> {
    let point_type = point.get_type();
    if point_type.is_ordered() {
        Ok(())
    } else {
        Err(ValueError::invalid_range(format!(
            "{point_type} is not an ordered type"
        )))
    }
}

fn validate_endpoints(start: &FeelValue, end: &FeelValue) -> ValueResult<()> {
    validate_point(start)?;
    if start.get_type() != end.get_type() {
        return Err(ValueError::invalid_range(format!(
            "endpoints have different types: {} and {}",
            start.get_type(),
            end.get_type()
        )));
    }
    match endpoint_order(start, end) {
        Some(Ordering::Greater) => Err(ValueError::invalid_range(format!(
            "start {start} is after end {end}"
        ))),
        _ => Ok(()),
    }
}

/// Natural order of two endpoints; durations are not checked
fn endpoint_order(start: &FeelValue, end: &FeelValue) -> Option<Ordering> {
    match (start, end) {
        (FeelValue::Number(a), FeelValue::Number(b)) => Some(a.cmp(b)),
        (FeelValue::String(a), FeelValue::String(b)) => Some(a.cmp(b)),
        (FeelValue::Date(a), FeelValue::Date(b)) => Some(a.cmp(b)),
        (FeelValue::Time(a), FeelValue::Time(b)) => {
            Some(a.utc_nanos_of_day().cmp(&b.utc_nanos_of_day()))
        }
        (FeelValue::DateTime(a), FeelValue::DateTime(b)) => {
            Some(a.instant_nanos().cmp(&b.instant_nanos()))
        }
        _ => None,
    }
}

impl fmt::Display for FeelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => {
                f.write_str(if self.start_included { "[" } else { "(" })?;
                start.fmt_nested(f)?;
                f.write_str("..")?;
                end.fmt_nested(f)?;
                f.write_str(if self.end_included { "]" } else { ")" })
            }
            (None, Some(end)) => {
                f.write_str(if self.end_included { "<= " } else { "< " })?;
                end.fmt_nested(f)
            }
            (Some(start), None) => {
                f.write_str(if self.start_included { ">= " } else { "> " })?;
                start.fmt_nested(f)
            }
            (None, None) => f.write_str("(null..null)"),
        }
    }
}
