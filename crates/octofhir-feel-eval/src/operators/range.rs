//! Range Operators for FEEL
//!
//! Implements: range construction from endpoints or from a unary operator,
//! and membership (`x in range`).

use crate::comparator::EqualityComparator;
use crate::error::{EvalError, EvalResult};
use crate::logic::Ternary;
use crate::operators::comparison::ValueComparator;
use crate::operators::model::{expect_string, ValueModel};
use octofhir_feel_types::{FeelRange, FeelType, FeelValue, RangeOperator};

/// Range operators
pub trait RangeType: ValueModel {
    /// Range from explicit endpoints; a null endpoint is unbounded
    fn range(
        &self,
        start_included: bool,
        start: &FeelValue,
        end: &FeelValue,
        end_included: bool,
    ) -> EvalResult<FeelValue>;

    /// Range from a unary test such as `< 10`
    fn range_from_operator(&self, operator: &FeelValue, endpoint: &FeelValue)
        -> EvalResult<FeelValue>;

    /// `point in range`
    fn range_contains(&self, range: &FeelValue, point: &FeelValue) -> EvalResult<Ternary>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRangeType {
    comparator: ValueComparator,
}

impl DefaultRangeType {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueModel for DefaultRangeType {
    fn feel_type(&self) -> FeelType {
        FeelType::Range
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}

impl RangeType for DefaultRangeType {
    fn range(
        &self,
        start_included: bool,
        start: &FeelValue,
        end: &FeelValue,
        end_included: bool,
    ) -> EvalResult<FeelValue> {
        let range = FeelRange::new(
            start_included,
            Some(start.clone()),
            Some(end.clone()),
            end_included,
        )?;
        Ok(FeelValue::Range(range))
    }

    fn range_from_operator(
        &self,
        operator: &FeelValue,
        endpoint: &FeelValue,
    ) -> EvalResult<FeelValue> {
        let symbol = expect_string(operator)?;
        let operator = RangeOperator::from_symbol(symbol).ok_or_else(|| {
            EvalError::invalid_operand("range", format!("unknown operator '{symbol}'"))
        })?;
        Ok(FeelValue::Range(FeelRange::from_operator(
            operator,
            endpoint.clone(),
        )?))
    }

    fn range_contains(&self, range: &FeelValue, point: &FeelValue) -> EvalResult<Ternary> {
        if range.is_null() || point.is_null() {
            return Ok(None);
        }
        let range = range
            .as_range()
            .ok_or_else(|| EvalError::unexpected("range", range))?;
        crate::library::range::includes_point(&self.comparator, range, point)
    }
}
