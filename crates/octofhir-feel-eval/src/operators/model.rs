//! Capabilities shared by every value model
//!
//! A value model owns the operators of one FEEL type. The type predicate,
//! `is`, `=` and `!=` come from [`ValueModel`]; types with an order add the
//! relational operators through [`OrderedValueModel`].

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::{EvalError, EvalResult};
use crate::logic::Ternary;
use crate::operators::comparison::value_is;
use bigdecimal::BigDecimal;
use octofhir_feel_types::number::to_i64;
use octofhir_feel_types::{
    FeelDate, FeelDateTime, FeelDuration, FeelTime, FeelType, FeelValue,
};

/// Operators every FEEL type has
pub trait ValueModel {
    /// FEEL type handled by this model
    fn feel_type(&self) -> FeelType;

    /// Comparator behind `=`
    fn equality(&self) -> &dyn EqualityComparator;

    /// Strict runtime type check
    fn is_instance(&self, value: &FeelValue) -> bool {
        value.get_type() == self.feel_type()
    }

    /// Fail unless `value` is null or an instance
    fn check(&self, value: &FeelValue) -> EvalResult<()> {
        if value.is_null() || self.is_instance(value) {
            Ok(())
        } else {
            Err(EvalError::unexpected(self.feel_type().name(), value))
        }
    }

    /// Comparable magnitude of an instance; null stays null
    fn value(&self, value: &FeelValue) -> EvalResult<FeelValue> {
        self.check(value)?;
        Ok(value.clone())
    }

    /// FEEL `is`
    fn is(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        Ok(Some(value_is(left, right)))
    }

    fn equal(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.equality().equal_to(left, right)
    }

    fn not_equal(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.equality().not_equal_to(left, right)
    }
}

/// Relational operators of ordered types
pub trait OrderedValueModel: ValueModel {
    /// Comparator behind `<`
    fn relation(&self) -> &dyn RelationalComparator;

    fn less_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.relation().less_than(left, right)
    }

    fn greater_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.relation().greater_than(left, right)
    }

    fn less_equal_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.relation().less_equal_than(left, right)
    }

    fn greater_equal_than(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<Ternary> {
        self.relation().greater_equal_than(left, right)
    }
}

// ============================================================================
// Operand extraction
// ============================================================================

pub(crate) fn expect_number(value: &FeelValue) -> EvalResult<&BigDecimal> {
    value
        .as_number()
        .ok_or_else(|| EvalError::unexpected("number", value))
}

/// Integral number argument of `function`
pub(crate) fn expect_integer(function: &str, value: &FeelValue) -> EvalResult<i64> {
    let n = expect_number(value)?;
    to_i64(n).ok_or_else(|| EvalError::invalid_operand(function, format!("{n} is not an integer")))
}

pub(crate) fn expect_string(value: &FeelValue) -> EvalResult<&str> {
    value
        .as_str()
        .ok_or_else(|| EvalError::unexpected("string", value))
}

pub(crate) fn expect_date(value: &FeelValue) -> EvalResult<&FeelDate> {
    value
        .as_date()
        .ok_or_else(|| EvalError::unexpected("date", value))
}

pub(crate) fn expect_time(value: &FeelValue) -> EvalResult<&FeelTime> {
    value
        .as_time()
        .ok_or_else(|| EvalError::unexpected("time", value))
}

pub(crate) fn expect_date_time(value: &FeelValue) -> EvalResult<&FeelDateTime> {
    value
        .as_date_time()
        .ok_or_else(|| EvalError::unexpected("date and time", value))
}

pub(crate) fn expect_duration(value: &FeelValue) -> EvalResult<&FeelDuration> {
    value
        .as_duration()
        .ok_or_else(|| EvalError::unexpected("duration", value))
}

pub(crate) fn expect_list(value: &FeelValue) -> EvalResult<&[FeelValue]> {
    value
        .as_list()
        .ok_or_else(|| EvalError::unexpected("list", value))
}

/// Check if any operand is null
pub(crate) fn any_null(operands: &[&FeelValue]) -> bool {
    operands.iter().any(|v| v.is_null())
}
