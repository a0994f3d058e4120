//! Arithmetic Operators for FEEL numbers
//!
//! Implements: +, -, *, /, ** and unary minus over decimals.
//! Every result is rounded into the injected [`MathContext`]; division by
//! zero is null.

use crate::comparator::{EqualityComparator, RelationalComparator};
use crate::error::EvalResult;
use crate::operators::comparison::NumericComparator;
use crate::operators::model::{any_null, expect_number, OrderedValueModel, ValueModel};
use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use octofhir_feel_types::number::{from_f64, to_i64};
use octofhir_feel_types::{FeelType, FeelValue, MathContext};

/// Largest integral exponent computed exactly
const MAX_EXACT_EXPONENT: u64 = 999_999_999;

/// Numeric operators
pub trait NumericType: OrderedValueModel {
    fn numeric_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn numeric_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn numeric_multiply(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn numeric_divide(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue>;

    fn numeric_unary_minus(&self, operand: &FeelValue) -> EvalResult<FeelValue>;

    fn numeric_exponentiation(&self, base: &FeelValue, exponent: &FeelValue)
        -> EvalResult<FeelValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNumericType {
    math: MathContext,
    comparator: NumericComparator,
}

impl DefaultNumericType {
    pub fn new(math: MathContext) -> Self {
        Self {
            math,
            comparator: NumericComparator::new(),
        }
    }

    pub fn math_context(&self) -> MathContext {
        self.math
    }

    fn binary(
        &self,
        left: &FeelValue,
        right: &FeelValue,
        op: impl FnOnce(&BigDecimal, &BigDecimal) -> Option<BigDecimal>,
    ) -> EvalResult<FeelValue> {
        if any_null(&[left, right]) {
            return Ok(FeelValue::Null);
        }
        let (a, b) = (expect_number(left)?, expect_number(right)?);
        Ok(op(a, b).map_or(FeelValue::Null, |v| FeelValue::Number(self.math.round(v))))
    }

    /// `base ** exponent` by repeated squaring, rounding every step
    fn integer_power(&self, base: &BigDecimal, exponent: i64) -> Option<BigDecimal> {
        let mut result = BigDecimal::from(1);
        let mut square = base.clone();
        let mut remaining = exponent.unsigned_abs();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.math.round(result * &square);
            }
            remaining >>= 1;
            if remaining > 0 {
                square = self.math.round(&square * &square);
            }
        }
        if exponent < 0 {
            if result.is_zero() {
                return None;
            }
            result = BigDecimal::from(1) / result;
        }
        Some(result)
    }
}

impl ValueModel for DefaultNumericType {
    fn feel_type(&self) -> FeelType {
        FeelType::Number
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}

impl OrderedValueModel for DefaultNumericType {
    fn relation(&self) -> &dyn RelationalComparator {
        &self.comparator
    }
}

impl NumericType for DefaultNumericType {
    fn numeric_add(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        self.binary(left, right, |a, b| Some(a + b))
    }

    fn numeric_subtract(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        self.binary(left, right, |a, b| Some(a - b))
    }

    fn numeric_multiply(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        self.binary(left, right, |a, b| Some(a * b))
    }

    fn numeric_divide(&self, left: &FeelValue, right: &FeelValue) -> EvalResult<FeelValue> {
        self.binary(left, right, |a, b| if b.is_zero() { None } else { Some(a / b) })
    }

    fn numeric_unary_minus(&self, operand: &FeelValue) -> EvalResult<FeelValue> {
        if operand.is_null() {
            return Ok(FeelValue::Null);
        }
        Ok(FeelValue::Number(-expect_number(operand)?.clone()))
    }

    fn numeric_exponentiation(
        &self,
        base: &FeelValue,
        exponent: &FeelValue,
    ) -> EvalResult<FeelValue> {
        self.binary(base, exponent, |b, e| match to_i64(e) {
            Some(n) if n.unsigned_abs() <= MAX_EXACT_EXPONENT => self.integer_power(b, n),
            _ => {
                let power = b.to_f64()?.powf(e.to_f64()?);
                from_f64(power)
            }
        })
    }
}
